use crate::{
    domain::common::{PantryChefConfig, services::Service},
    infrastructure::llm::GatewayLLMClient,
};

pub type PantryChefService = Service<GatewayLLMClient>;

pub fn create_service(config: PantryChefConfig) -> Result<PantryChefService, reqwest::Error> {
    let llm_client = GatewayLLMClient::new(config.llm)?;

    Ok(Service::new(llm_client))
}
