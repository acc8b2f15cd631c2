pub mod client;
pub mod utils;
pub mod bounty {
    pub mod adapter;
    pub mod model;
    pub mod store;
}
pub mod claim {
    pub mod adapter;
    pub mod model;
    pub mod store;
}
pub mod withdrawal {
    pub mod adapter;
    pub mod model;
    pub mod store;
}
pub mod cursor {
    pub mod store;
}
pub mod query {
    pub mod model;
    pub mod store;
}
