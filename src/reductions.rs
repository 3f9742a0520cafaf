pub mod sat_to_three_sat;
pub mod three_sat_to_clique;

pub use sat_to_three_sat::sat_to_three_sat;
pub use three_sat_to_clique::{three_sat_to_clique, CliqueInstance};
