mod common;
pub use self::common::{Query, QueryCommon};

mod post;
pub use self::post::PostQuery;

mod category;
pub use self::category::CategoryQuery;
