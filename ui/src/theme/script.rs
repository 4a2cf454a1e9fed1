use super::{Theme, ThemeAttribute, ThemeOptions};

/// Inline script for the document head that paints the stored (or system)
/// theme onto `<html>` before first paint, so dark-mode users never see a
/// light flash while the bundle loads.
///
/// The values are embedded as JSON string literals with `</` escaped so the
/// script can't be closed early by configuration.
pub fn theme_init_script(options: &ThemeOptions) -> String {
    let key = js_string(&options.storage_key);
    let default_theme = js_string(options.default_theme.as_str());
    let enable_system = options.enable_system;
    let color_scheme = options.enable_color_scheme;

    let apply = match &options.attribute {
        ThemeAttribute::Class => {
            "d.classList.remove(\"light\",\"dark\");d.classList.add(r);"
                .to_string()
        }
        ThemeAttribute::Data(name) => {
            format!("d.setAttribute({},r);", js_string(name))
        }
    };
    let fallback = js_string(Theme::Light.as_str());

    format!(
        "(function(){{try{{var d=document.documentElement;\
var t=localStorage.getItem({key})||{default_theme};\
if(t===\"system\"){{t={enable_system}?\"system\":{fallback}}}\
var r=t===\"system\"?(window.matchMedia(\"(prefers-color-scheme: dark)\").matches?\"dark\":\"light\"):t;\
if(r!==\"dark\"){{r=\"light\"}}\
{apply}\
if({color_scheme}){{d.style.colorScheme=r}}\
}}catch(e){{}}}})()"
    )
}

fn js_string(value: &str) -> String {
    // Serializing a str cannot fail.
    serde_json::to_string(value)
        .unwrap_or_default()
        .replace("</", "<\\/")
}
