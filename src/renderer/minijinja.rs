use super::filters::*;
use crate::{error::Result, ext::PathExt, renderer::interface::TemplateRenderer};
use minijinja::{AutoEscape, Environment};
use std::path::Path;

/// MiniJinja-based template rendering engine.
///
/// Output is never HTML-escaped: generated sources are not markup.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("train_case", to_train_case);
        env.add_filter("plural", to_plural);
        env.add_filter("singular", to_singular);
        env.add_filter("yes", yes_filter);

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }

    fn render_path(
        &self,
        template_path: &Path,
        context: &serde_json::Value,
    ) -> Result<String> {
        self.render(template_path.to_str_checked()?, context)
    }
}

#[cfg(test)]
mod tests {
    use crate::renderer::{interface::TemplateRenderer, MiniJinjaRenderer};
    use serde_json::json;
    use std::path::Path;

    fn test_template(template: &str, expected: &str) {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render(template, &json!({})).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_substitution() {
        let renderer = MiniJinjaRenderer::new();
        let rendered = renderer
            .render("{{artifact_id}} by {{ author }}", &json!({"artifact_id": "my-service", "author": "me"}))
            .unwrap();
        assert_eq!(rendered, "my-service by me");
    }

    #[test]
    fn test_string_conversion_filters() {
        test_template("{{ 'hello world' | camel_case }}", "helloWorld");
        test_template("{{ 'hello world' | kebab_case }}", "hello-world");
        test_template("{{ 'hello world' | pascal_case }}", "HelloWorld");
        test_template("{{ 'hello world' | snake_case }}", "hello_world");
        test_template("{{ 'car' | plural }}", "cars");
        test_template("{% if 'y' | yes %}ok{% endif %}", "ok");
        test_template("{% if 'no' | yes %}ok{% else %}skip{% endif %}", "skip");
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = MiniJinjaRenderer::new();
        let rendered = renderer
            .render("{{ generic }}", &json!({"generic": "List<String> & \"more\""}))
            .unwrap();
        assert_eq!(rendered, "List<String> & \"more\"");
    }

    #[test]
    fn test_keeps_trailing_newline() {
        test_template("line\n", "line\n");
    }

    #[test]
    fn test_render_path() {
        let renderer = MiniJinjaRenderer::new();
        let rendered = renderer
            .render_path(
                Path::new("out/{{artifact_id}}-api/src/{{group_id_slashes}}/App.java"),
                &json!({ "artifact_id": "demo", "group_id_slashes": "com/example" }),
            )
            .unwrap();
        assert_eq!(rendered, "out/demo-api/src/com/example/App.java");
    }
}
