//! Visual theme presets
//!
//! The preset is chosen once at bootstrap and handed to the component tree
//! as context; [`ThemeStyle`] turns it into a stylesheet.

use dioxus::prelude::*;

/// Named colors of a preset. Exposed to CSS as `--mascot-<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_contrast: &'static str,
    pub surface: &'static str,
    pub surface_raised: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub success: &'static str,
    pub danger: &'static str,
}

impl Palette {
    /// `(css variable suffix, value)` pairs in declaration order
    pub fn entries(&self) -> [(&'static str, &'static str); 9] {
        [
            ("primary", self.primary),
            ("primary-contrast", self.primary_contrast),
            ("surface", self.surface),
            ("surface-raised", self.surface_raised),
            ("border", self.border),
            ("text", self.text),
            ("text-muted", self.text_muted),
            ("success", self.success),
            ("danger", self.danger),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreset {
    /// Emerald accent on light slate surfaces
    #[default]
    Aura,
}

impl ThemePreset {
    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Aura => "aura",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemePreset::Aura => Palette {
                primary: "#10b981",
                primary_contrast: "#ffffff",
                surface: "#f8fafc",
                surface_raised: "#ffffff",
                border: "#e2e8f0",
                text: "#334155",
                text_muted: "#64748b",
                success: "#22c55e",
                danger: "#ef4444",
            },
        }
    }

    /// Full stylesheet: palette variables followed by component rules.
    pub fn css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.palette().entries() {
            css.push_str(&format!("  --mascot-{name}: {value};\n"));
        }
        css.push_str("}\n");
        css.push_str(COMPONENT_CSS);
        css
    }
}

const COMPONENT_CSS: &str = r#"
body {
  margin: 0;
  font-family: system-ui, sans-serif;
  font-size: 14px;
  background: var(--mascot-surface);
  color: var(--mascot-text);
}
.settings-window { padding: 16px; display: flex; flex-direction: column; gap: 12px; }
.settings-section {
  background: var(--mascot-surface-raised);
  border: 1px solid var(--mascot-border);
  border-radius: 8px;
  padding: 12px;
}
.settings-section h4 { margin: 0 0 8px; font-size: 13px; color: var(--mascot-text-muted); text-transform: uppercase; }
.setting-row { display: flex; align-items: center; gap: 8px; margin: 6px 0; }
.setting-row label { flex: 0 0 130px; }
.setting-row input[type=number], .setting-row input[type=text] {
  flex: 1;
  min-width: 0;
  padding: 4px 6px;
  border: 1px solid var(--mascot-border);
  border-radius: 4px;
}
.setting-row input[type=range] { flex: 1; accent-color: var(--mascot-primary); }
.value-display { min-width: 56px; text-align: right; color: var(--mascot-text-muted); }
.btn {
  padding: 6px 12px;
  border: 1px solid var(--mascot-border);
  border-radius: 6px;
  background: var(--mascot-surface-raised);
  color: var(--mascot-text);
  cursor: pointer;
}
.btn:disabled { opacity: 0.5; cursor: default; }
.btn-primary { background: var(--mascot-primary); border-color: var(--mascot-primary); color: var(--mascot-primary-contrast); }
.btn-small { padding: 3px 8px; font-size: 12px; }
.settings-actions { display: flex; justify-content: flex-end; gap: 8px; }
.unsaved-hint { margin-right: auto; align-self: center; color: var(--mascot-text-muted); }
.toast-container { position: fixed; bottom: 12px; right: 12px; display: flex; flex-direction: column; gap: 6px; }
.toast {
  display: flex;
  align-items: center;
  gap: 8px;
  padding: 8px 12px;
  border-radius: 6px;
  background: var(--mascot-surface-raised);
  border-left: 4px solid var(--mascot-primary);
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.12);
}
.toast-success { border-left-color: var(--mascot-success); }
.toast-error { border-left-color: var(--mascot-danger); }
.toast-close { border: none; background: none; cursor: pointer; color: var(--mascot-text-muted); }
"#;

/// Injects the stylesheet of the preset provided at bootstrap.
#[component]
pub fn ThemeStyle() -> Element {
    let theme = use_context::<ThemePreset>();
    let css = theme.css();

    rsx! {
        style { "data-theme": theme.name(), "{css}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_declares_every_palette_variable() {
        let preset = ThemePreset::Aura;
        let css = preset.css();
        for (name, value) in preset.palette().entries() {
            assert!(
                css.contains(&format!("--mascot-{name}: {value};")),
                "missing --mascot-{name}"
            );
        }
    }

    #[test]
    fn component_rules_only_use_declared_variables() {
        let preset = ThemePreset::Aura;
        let declared: Vec<_> = preset.palette().entries().iter().map(|(n, _)| *n).collect();
        for usage in COMPONENT_CSS.split("var(--mascot-").skip(1) {
            let name = usage.split(')').next().unwrap();
            assert!(declared.iter().any(|d| *d == name), "undeclared variable {name}");
        }
    }
}
