pub mod filter;
pub mod labels;
pub mod page;
pub mod routes;
pub mod slug;
pub mod tables;

pub use filter::{
    build_filter, build_filter_for_kinds, build_roommate_filter, PathParams, QueryParams,
};
pub use labels::{resolve_label, LabelFallback, LabelTable};
pub use page::{PageResolver, PageResponse};
pub use routes::{compose_alternate_locale_urls, compose_listing_url, parse_listing_path};
pub use slug::slugify;
pub use tables::{map_amenity, map_property, map_token, map_transaction, Vocabulary};
