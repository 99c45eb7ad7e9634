pub mod add;
pub mod delete;
pub mod get;
pub mod update;

pub use add::*;
pub use delete::*;
pub use get::*;
pub use update::*;

use actix_web::HttpRequest;

/// `scheme://host` of the current request, prefix of every link we hand out
pub(crate) fn base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}
