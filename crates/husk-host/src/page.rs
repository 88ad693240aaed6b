use husk_core::FrameOptions;
use std::path::Path;

/// Host page wrapping the bundle in an embedded frame. All chrome is hidden
/// and the frame fills the viewport: full width, no border, scroll inside.
pub fn host_page(frame: &FrameOptions) -> String {
    let scrolling = if frame.scrolling { "yes" } else { "no" };
    let height = frame.height;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>B-Progress Tracker</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>&#128200;</text></svg>">
<style>
*{{margin:0;padding:0;box-sizing:border-box}}
html,body{{height:100%;background:#0a0a0f}}
header,footer,menu{{display:none}}
iframe{{display:block;width:100%;min-height:100vh;border:none}}
</style>
</head>
<body>
<iframe src="/app" title="B-Progress Tracker" height="{height}" scrolling="{scrolling}"></iframe>
</body>
</html>"#
    )
}

/// Static remediation page shown when the build artifact is absent. Purely
/// informational: the operator fixes this by building and committing dist/.
pub fn missing_bundle_page(looked_at: &Path) -> String {
    let path = looked_at.display();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>B-Progress Tracker — build missing</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box}}
body{{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;background:#0a0a0f;color:#e2e8f0;padding:4rem 2rem;max-width:720px;margin:0 auto}}
h1{{font-size:1.75rem;font-weight:700;margin-bottom:1rem}}
p{{color:#9ca3af;line-height:1.7;margin-bottom:1.5rem}}
code{{background:#1a1a2e;border:1px solid #2d2d52;border-radius:.25rem;padding:.125rem .375rem;font-size:.85rem;color:#a78bfa}}
h2{{font-size:1.1rem;font-weight:600;margin-bottom:.75rem;color:#a78bfa}}
ol{{margin-left:1.5rem;color:#9ca3af;line-height:2}}
</style>
</head>
<body>
<h1>&#128640; Build folder not found!</h1>
<p>Expected the frontend build output at <code>{path}</code>. To host this app you must first run <code>npm run build</code> and include the <code>dist</code> folder in your repository.</p>
<h2>Quick Fix</h2>
<ol>
<li>Open your terminal.</li>
<li>Run <code>npm install</code>.</li>
<li>Run <code>npm run build</code>.</li>
<li>Commit and push the <code>dist/</code> folder.</li>
</ol>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn host_page_frames_the_bundle_route() {
        let html = host_page(&FrameOptions::default());
        assert!(html.contains(r#"<iframe src="/app""#));
        assert!(html.contains(r#"height="1000""#));
        assert!(html.contains(r#"scrolling="yes""#));
        assert!(html.contains("border:none"));
    }

    #[test]
    fn frame_options_are_honored() {
        let html = host_page(&FrameOptions {
            height: 600,
            scrolling: false,
        });
        assert!(html.contains(r#"height="600""#));
        assert!(html.contains(r#"scrolling="no""#));
    }

    #[test]
    fn remediation_page_lists_all_four_steps() {
        let html = missing_bundle_page(&PathBuf::from("dist/index.html"));
        assert!(html.contains("Build folder not found"));
        assert!(html.contains("Open your terminal"));
        assert!(html.contains("npm install"));
        assert!(html.contains("npm run build"));
        assert!(html.contains("dist/"));
    }
}
