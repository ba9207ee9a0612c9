mod cells;
mod bulk;
