pub mod credentials;
pub mod de;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::chart_data_point::ChartDataPoint;
pub use models::folder::Folder;
pub use models::history_item::HistoryItem;
pub use models::history_record::{HistoryRecord, NewHistoryRecord};
pub use models::lookup_row::LookupRow;
pub use models::output_file::{NewOutputFile, OutputFile};
pub use models::user::{NewUser, User};
pub use models::user_preference::UserPreference;

pub use error_location::ErrorLocation;
