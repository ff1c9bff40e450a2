// package together all of the following and re-export
// in a partially flattened structure :
// : cone traits and the supported cone implementations
// : the Newton step engine
// : problem seam traits
// : user settings, errors and the solution record
// : the predictor-corrector driver

pub mod cones;
pub(crate) mod kktsolvers;
pub mod traits;

//partially flatten top level pieces

mod constraints;
mod errors;
mod info;
mod info_print;
mod residuals;
mod settings;
mod solution;
mod solver;
mod variables;
pub use constraints::*;
pub use errors::*;
pub use info::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;
pub use variables::*;
