use yew::prelude::*;

/// Properties for the `ScholarshipForm` component.
#[derive(Properties, PartialEq, Clone)]
pub struct ScholarshipFormProps {
    /// Base URL of the storage and REST endpoints.
    ///
    /// `None` (the default) targets the origin that served the page, which is
    /// the backend when the form is embedded in it.
    #[prop_or_default]
    pub api_base: Option<String>,
}
