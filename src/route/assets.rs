use askama::Template;
use rocket::response::content::RawHtml;
use rocket::{get, routes, Route, State};
use serde::{Deserialize, Serialize};

use crate::error::{AssetError, AssetResult};
use crate::route::common::{success_return, RouteResult};
use crate::service::Ink;

/// Stylesheets every page pulls in
pub const PAGE_STYLESHEETS: [&str; 2] = ["css/ink.css", "css/font-awesome.css"];

/// Scripts every page pulls in
pub const PAGE_SCRIPTS: [&str; 2] = ["js/holder.js", "js/ink-all.js"];

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    title: String,
    stylesheets: Vec<String>,
    scripts: Vec<String>,
}

/// Resolved URL for a single asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetUrlView {
    pub file: String,
    pub location: String,
    pub url: String,
}

/// Registered locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsView {
    pub default_location: String,
    pub locations: Vec<String>,
}

fn render_template<T: Template>(template: &T) -> RawHtml<String> {
    match template.render() {
        Ok(html) => RawHtml(html),
        Err(err) => RawHtml(format!("<h1>Template render error</h1><pre>{err}</pre>")),
    }
}

fn load_all(ink: &Ink, files: &[&str]) -> AssetResult<Vec<String>> {
    files.iter().map(|file| ink.load_asset(file, None)).collect()
}

/// Sample page whose asset tags come from `ink_load_asset`
#[get("/")]
pub fn index(ink: &State<Ink>) -> Result<RawHtml<String>, AssetError> {
    let template = IndexTemplate {
        title: "Flask-Ink sample".to_string(),
        stylesheets: load_all(ink, &PAGE_STYLESHEETS)?,
        scripts: load_all(ink, &PAGE_SCRIPTS)?,
    };
    Ok(render_template(&template))
}

/// Resolve a single asset, e.g. `/assets/url?file=ink.css&location=local`
#[get("/url?<file>&<location>")]
pub fn asset_url(
    ink: &State<Ink>,
    file: &str,
    location: Option<&str>,
) -> RouteResult<AssetUrlView> {
    let url = ink.load_asset(file, location)?;
    let location = location
        .filter(|l| !l.is_empty())
        .unwrap_or(ink.assets().default_location());

    Ok(success_return(AssetUrlView {
        file: file.to_string(),
        location: location.to_string(),
        url,
    }))
}

/// List the registered locations
#[get("/locations")]
pub fn locations(ink: &State<Ink>) -> RouteResult<LocationsView> {
    let assets = ink.assets();
    Ok(success_return(LocationsView {
        default_location: assets.default_location().to_string(),
        locations: assets
            .registry()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }))
}

/// Routes mounted under `/assets`
pub fn routes() -> Vec<Route> {
    routes![asset_url, locations]
}

#[cfg(test)]
mod tests {
    use super::{PAGE_SCRIPTS, PAGE_STYLESHEETS};
    use crate::config::{InkConfig, INK_VERSION};
    use crate::service::Ink;
    use rocket::http::Status;
    use rocket::local::blocking::Client;
    use serde_json::Value;

    fn client(config: InkConfig) -> Client {
        let ink = Ink::new(&config).expect("valid ink config");
        Client::tracked(crate::build_rocket(&config, ink)).expect("valid rocket instance")
    }

    #[test]
    fn test_index_uses_default_location() {
        let client = client(InkConfig::default());
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body = response.into_string().unwrap();
        assert!(body.contains(&format!(
            "//cdn.ink.sapo.pt/{INK_VERSION}/css/ink.css?v={INK_VERSION}"
        )));
        assert!(body.contains(&format!(
            "//cdn.ink.sapo.pt/{INK_VERSION}/js/ink-all.js?v={INK_VERSION}"
        )));
    }

    #[test]
    fn test_index_with_local_minified_assets() {
        let client = client(InkConfig {
            default_location: "local".to_string(),
            minify_assets: true,
            ..InkConfig::default()
        });
        let body = client.get("/").dispatch().into_string().unwrap();
        assert!(body.contains("/static/ink/css/ink.min.css"));
        assert!(body.contains("/static/ink/js/holder.min.js"));
    }

    #[test]
    fn test_asset_url_endpoint() {
        let client = client(InkConfig::default());
        let response = client
            .get("/assets/url?file=/ink.css&location=local")
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        let json: Value = response.into_json().unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["value"]["location"], "local");
        assert_eq!(json["value"]["url"], "/static/ink/ink.css");
    }

    #[test]
    fn test_asset_url_blank_location_uses_default() {
        let client = client(InkConfig {
            default_location: "local".to_string(),
            ..InkConfig::default()
        });
        let json: Value = client
            .get("/assets/url?file=ink.js&location=")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(json["value"]["location"], "local");
        assert_eq!(json["value"]["url"], "/static/ink/ink.js");
    }

    #[test]
    fn test_local_page_assets_are_served() {
        let client = client(InkConfig {
            default_location: "local".to_string(),
            ..InkConfig::default()
        });
        for file in PAGE_STYLESHEETS.iter().chain(PAGE_SCRIPTS.iter()) {
            let response = client.get(format!("/static/ink/{file}")).dispatch();
            assert_eq!(response.status(), Status::Ok, "{file}");
        }
    }

    #[test]
    fn test_asset_url_unknown_location() {
        let client = client(InkConfig::default());
        let response = client
            .get("/assets/url?file=ink.css&location=nope")
            .dispatch();
        assert_eq!(response.status(), Status::NotFound);

        let json: Value = response.into_json().unwrap();
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("nope"));
    }

    #[test]
    fn test_locations_endpoint() {
        let client = client(InkConfig::default());
        let json: Value = client
            .get("/assets/locations")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(json["value"]["default_location"], "sapo");
        assert_eq!(json["value"]["locations"][0], "local");
        assert_eq!(json["value"]["locations"][1], "sapo");
    }
}
