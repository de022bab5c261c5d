// crates/citytree-core/src/prelude.rs
pub use crate::city::City;
pub use crate::common::TreeStats;
pub use crate::error::{CityError, Result};
pub use crate::loader::{
    load_from_path, load_from_reader, parse_city_line, LoadNotice, LoadReport,
};
pub use crate::traits::{CityIndex, NameMatch};
pub use crate::tree::{CityTree, Insertion};
