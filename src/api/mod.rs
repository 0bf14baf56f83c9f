pub mod nominatim;

pub use nominatim::{
    DEFAULT_LIMIT, NOMINATIM_URL, NominatimClient, SearchError, SearchParams, USER_AGENT,
    build_search_request, decode_locations, join_query,
};
