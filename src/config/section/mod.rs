//! Configuration section definitions.
//!
//! | Section      | Purpose                                   |
//! |--------------|-------------------------------------------|
//! | `[routes]`   | Where the route table lives               |
//! | `[schema]`   | Known roles, dynamic base paths           |
//! | `[check]`    | Failure level of rule violations          |
//! | `[resolve]`  | Defaults for synthesized parents          |

mod check;
mod resolve;
mod routes;
mod schema;

pub use check::{CheckConfig, CheckLevel};
pub use resolve::ResolveConfig;
pub use routes::RoutesConfig;
pub use schema::SchemaConfig;
