//! Request dispatch.
//!
//! - **`router`**: exact path matching with a static-asset fallback
//! - **`handler`**: the handler contract and the GET/POST dispatch wrapper
//! - **`assets`**: asset stores backing the static handler
//! - **`static_files`**: static responses and the 404/405 pages

pub mod assets;
pub mod handler;
pub mod router;
pub mod static_files;

pub use assets::{AssetStore, DirAssetStore, MemoryAssetStore};
pub use handler::{Handler, MethodDispatch, MethodHandler};
pub use router::Router;
pub use static_files::StaticHandler;
