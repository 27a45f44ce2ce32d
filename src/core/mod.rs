pub mod etl;
pub mod partition;
pub mod pipeline;
pub mod region_map;
pub mod roster;
pub mod xlsx;
pub mod zipcode;

pub use crate::domain::model::{
    MemberRecord, RawSheet, RegionGroup, RegionMap, RegionMapEntry, RosterTable, SourceData,
    SplitResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
