//! Print the OpenAPI document as JSON.

use std::error::Error;
use std::io::Write as _;

use bookshop::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn Error>> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    writeln!(std::io::stdout().lock(), "{json}")?;
    Ok(())
}
