//! Query-result interception and field-dependency metadata

pub mod core;
pub mod sorting;
pub mod table;

pub use self::core::SortingDataFactoryCore;
pub use self::sorting::SortingDataFactory;
pub use self::table::TableDataFactory;
