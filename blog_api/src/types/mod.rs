mod meta;
pub use self::meta::{PageLinks, PageMeta, PaginatedResponse};

mod post;
pub use self::post::{BlogPost, PostAuthor, PostCategory, PostID, PostPatch};

mod category;
pub use self::category::{BlogCategory, CategoryID, CategoryPatch};

mod timestamp;
pub use self::timestamp::parse_timestamp;
