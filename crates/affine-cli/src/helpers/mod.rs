mod input;

pub use input::read_solve_inputs;
