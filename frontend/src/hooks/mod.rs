pub mod use_rotating_index;
