pub mod population;

pub use population::Population;
