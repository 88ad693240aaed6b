use husk_core::Secrets;
use tracing::warn;

const HEAD_TAG: &str = "<head>";

/// Builds the inline script that exposes the secrets to the bundle as
/// `window.process.env`. Values go in verbatim, byte for byte; a quote inside
/// a secret will break the script, exactly as it would for the build-time
/// `define` block the bundle was compiled against.
pub fn build_env_script(secrets: &Secrets) -> String {
    format!(
        concat!(
            "<script>\n",
            "  window.process = {{\n",
            "    env: {{\n",
            "      API_KEY: \"{}\",\n",
            "      SUPABASE_URL: \"{}\",\n",
            "      SUPABASE_KEY: \"{}\"\n",
            "    }}\n",
            "  }};\n",
            "</script>"
        ),
        secrets.api_key, secrets.supabase_url, secrets.supabase_key
    )
}

/// Splices the env script immediately after the first `<head>`. A document
/// with no `<head>` comes back unchanged, with a warning so the condition is
/// visible to the operator rather than silently dropped.
pub fn inject_secrets(html: &str, secrets: &Secrets) -> String {
    let script = build_env_script(secrets);

    match html.find(HEAD_TAG) {
        Some(pos) => {
            let insert_at = pos + HEAD_TAG.len();
            let mut result = String::with_capacity(html.len() + script.len());
            result.push_str(&html[..insert_at]);
            result.push_str(&script);
            result.push_str(&html[insert_at..]);
            result
        }
        None => {
            warn!("bundle html has no <head> tag, secrets were not injected");
            html.to_string()
        }
    }
}
