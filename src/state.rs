use std::sync::Arc;

use crate::couplet::CoupletWriter;
use crate::llm::ImageGateway;
use crate::nft::NftService;
use crate::options::OptionRegistry;
use crate::prompt::PromptCompiler;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<OptionRegistry>,
    pub compiler: Arc<PromptCompiler>,
    pub writer: Arc<CoupletWriter>,
    pub images: Arc<dyn ImageGateway>,
    pub nfts: Arc<NftService>,
}

impl AppState {
    pub fn new(
        registry: Arc<OptionRegistry>,
        writer: CoupletWriter,
        images: Arc<dyn ImageGateway>,
        nfts: NftService,
    ) -> Self {
        AppState {
            compiler: Arc::new(PromptCompiler::new(Arc::clone(&registry))),
            registry,
            writer: Arc::new(writer),
            images,
            nfts: Arc::new(nfts),
        }
    }
}
