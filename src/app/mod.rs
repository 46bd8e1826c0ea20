pub mod export;
pub mod sources;

use crate::config::settings::Settings;
use crate::core::engine::SalaryEngine;
use crate::utils::error::Result;
use sources::{build_client, HeadHunterSource, SuperJobSource};

/// Wires both sources, hh.ru first, sharing one HTTP client.
pub fn build_engine(settings: &Settings, superjob_token: &str) -> Result<SalaryEngine> {
    let client = build_client()?;

    let headhunter = HeadHunterSource::with_client(
        client.clone(),
        settings.headhunter.endpoint.clone(),
        settings.headhunter.params.clone(),
    );
    let superjob = SuperJobSource::with_client(
        client,
        settings.superjob.endpoint.clone(),
        superjob_token,
        settings.superjob.params.clone(),
    );

    Ok(SalaryEngine::new(settings.keywords.clone())
        .with_source(
            headhunter,
            settings.headhunter.title.clone(),
            settings.headhunter.header.clone(),
        )
        .with_source(
            superjob,
            settings.superjob.title.clone(),
            settings.superjob.header.clone(),
        ))
}
