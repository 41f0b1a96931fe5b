/// Core reusable data structures
pub mod arena;
pub mod queue;
pub mod stack;
pub mod linked_list;
pub mod doubly_linked_list;
pub mod circular_list;
pub mod hash_table;
pub mod binary_tree;
pub mod graph;


// Export the main types
pub use arena::{Iter, NodeHandle, NodeRef};
pub use queue::Queue;
pub use stack::Stack;
pub use linked_list::LinkedList;
pub use doubly_linked_list::DoublyLinkedList;
pub use circular_list::CircularList;
pub use hash_table::{HashTable, KeyHasher, PositionalHasher};
pub use binary_tree::{BinaryTree, InOrder, SortedTree};
pub use graph::{Edge, Graph, PathResult};
