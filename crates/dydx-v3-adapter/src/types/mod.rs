/*
[INPUT]:  dYdX v3 REST payloads and request parameters
[OUTPUT]: Serde-backed request, response and enum types
[POS]:    Data layer - shared by the HTTP clients, signers and CLI
[UPDATE]: When endpoint payloads change or new parameters are added
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use models::*;
pub use requests::*;
pub use responses::*;
