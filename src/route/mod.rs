//! Route descriptor schema.
//!
//! | Module      | Purpose                                           |
//! |-------------|---------------------------------------------------|
//! | `key`       | Route keys, system keys, well-formedness          |
//! | `path`      | Key → path projection, dynamic `:module` paths    |
//! | `component` | Layout component tags                             |
//! | `meta`      | Route metadata                                    |
//! | `props`     | Three-shape props                                 |
//! | `record`    | The route record                                  |
//! | `single`    | Single route classification and parent derivation |

mod component;
mod key;
mod meta;
mod path;
mod props;
mod record;
mod single;

pub use component::{RouteComponent, SingleLayout};
pub use key::{KeyError, PARENT_SUFFIX, RawKey, RouteKey, SPLIT_MARK, SystemKey};
pub use meta::RouteMeta;
pub use path::{
    CATCH_ALL_PATH, DynamicPath, MODULE_PARAM, ModuleParam, PathError, ROOT_PATH, RoutePath,
    key_to_path,
};
pub use props::{NavigationTarget, PropsFn, PropsMap, RouteProps};
pub use record::Route;
pub use single::{KeySet, SingleRouteParent};
