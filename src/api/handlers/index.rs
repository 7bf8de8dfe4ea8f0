use axum::response::Html;

/// Greeting shown on the index page
pub const GREETING: &str = "Hello from MVP Test App";

/// GET /
///
/// Renders the HTML index page with the greeting message.
pub async fn index() -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>MVP Test App</title></head>\n\
         <body>\n\
         <h1>{GREETING}</h1>\n\
         </body>\n\
         </html>\n"
    ))
}
