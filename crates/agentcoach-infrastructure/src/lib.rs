pub mod config_service;
pub mod knowledge_loader;
pub mod paths;
pub mod pdf_extractor;
pub mod secret_service;

pub use crate::config_service::ConfigService;
pub use crate::knowledge_loader::DirectoryKnowledgeLoader;
pub use crate::paths::AgentCoachPaths;
pub use crate::pdf_extractor::LopdfExtractor;
pub use crate::secret_service::load_api_key;
