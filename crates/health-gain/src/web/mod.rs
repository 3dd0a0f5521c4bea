mod router;

pub use router::{
    download_links, estimate_router, EstimateState, CSV_PATH, ESTIMATE_API_PATH,
    ESTIMATE_PAGE_PATH, SUMMARY_PATH,
};
