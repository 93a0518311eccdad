use common::{Commune, Province};

use crate::api_client::{self, Result};

/// Get all provinces
pub async fn get_provinces() -> Result<Vec<Province>> {
    log::trace!("Fetching province list");
    let provinces: Vec<Province> = api_client::get("/tinh").await?;
    log::info!("Fetched {} provinces", provinces.len());
    Ok(provinces)
}

/// Get the communes and wards of one province
pub async fn get_communes(mahc: &str) -> Result<Vec<Commune>> {
    log::trace!("Fetching communes for province {}", mahc);
    let segment = String::from(js_sys::encode_uri_component(mahc.trim()));
    let communes: Vec<Commune> = api_client::get(&format!("/xa/{}", segment)).await?;
    log::info!("Fetched {} communes for province {}", communes.len(), mahc);
    Ok(communes)
}
