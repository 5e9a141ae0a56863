mod template;
mod titles;

pub use template::PromptTemplate;
pub use titles::{
    build_title_request, title_list_schema, title_prompt, DEFAULT_TITLE_MODEL, TITLE_PROMPT,
};
