mod bubble;

pub use bubble::bubble_sort;
