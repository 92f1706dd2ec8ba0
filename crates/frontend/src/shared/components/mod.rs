pub mod firm;
pub mod page_header;
pub mod resource_card;
pub mod stat_card;

pub use firm::{firm_details, FirmCard};
pub use page_header::PageHeader;
pub use resource_card::{InfoLine, ResourceCard};
pub use stat_card::StatCard;
