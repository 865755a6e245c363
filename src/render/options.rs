use serde::Serialize;

use crate::release::NormalizedRelease;

/// An entry of the version selector: positional index and display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionOption {
    pub value: usize,
    pub label: String,
}

/// Label shown for a release in the selector, `"<version> (<date>)"`.
pub fn option_label(release: &NormalizedRelease) -> String {
    format!("{} ({})", release.version, release.date)
}

/// One option per release, in list order.
pub fn version_options(releases: &[NormalizedRelease]) -> Vec<VersionOption> {
    releases
        .iter()
        .enumerate()
        .map(|(value, release)| VersionOption {
            value,
            label: option_label(release),
        })
        .collect()
}

/// `<option>` elements for the selector, preceded by an empty placeholder.
///
/// Labels are option text, so they are escaped.
pub fn render_options(options: &[VersionOption]) -> String {
    let mut html = String::from(r#"<option value="">Select a version</option>"#);
    for option in options {
        html.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            option.value,
            escape_html(&option.label)
        ));
    }
    html
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::PlatformMap;

    fn release(version: &str, date: &str) -> NormalizedRelease {
        NormalizedRelease {
            version: version.into(),
            date: date.into(),
            description: String::new(),
            platforms: PlatformMap::default(),
            url: String::new(),
        }
    }

    #[test]
    fn test_version_options() {
        let releases = vec![
            release("v2.0.0", "2/1/2024"),
            release("v1.0.0", "1/1/2024"),
        ];

        let options = version_options(&releases);

        assert_eq!(
            options,
            vec![
                VersionOption {
                    value: 0,
                    label: "v2.0.0 (2/1/2024)".into()
                },
                VersionOption {
                    value: 1,
                    label: "v1.0.0 (1/1/2024)".into()
                },
            ]
        );
    }

    #[test]
    fn test_version_options_empty() {
        assert!(version_options(&[]).is_empty());
    }

    #[test]
    fn test_render_options() {
        let options = version_options(&[release("v1.0.0", "1/1/2024")]);

        assert_eq!(
            render_options(&options),
            r#"<option value="">Select a version</option><option value="0">v1.0.0 (1/1/2024)</option>"#
        );
    }

    #[test]
    fn test_render_options_escapes_label() {
        let options = version_options(&[release(r#"v1<beta>&"x"'y'"#, "1/1/2024")]);

        assert_eq!(
            render_options(&options),
            r#"<option value="">Select a version</option><option value="0">v1&lt;beta&gt;&amp;&quot;x&quot;&#39;y&#39; (1/1/2024)</option>"#
        );
        // The label itself stays raw for plain-text output
        assert_eq!(options[0].label, r#"v1<beta>&"x"'y' (1/1/2024)"#);
    }
}
