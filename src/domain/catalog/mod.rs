mod key;
mod model;
mod validation;

pub use key::FragmentKey;
pub use model::{
    Category, CategorySpecial, PromptFragment, PromptsConfig, SubCategory,
    SubjectEnvironmentExample,
};
pub use validation::validate_prompts;
