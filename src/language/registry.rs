use std::collections::HashMap;

use crate::config::CustomLanguageConfig;

/// Control keywords counted toward the logical line count of Python-like sources.
pub const DEFAULT_CONTROL_KEYWORDS: [&str; 6] = ["if", "for", "while", "do", "try", "switch"];

/// Line-level syntax needed by the classifier and the structural extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSyntax {
    pub comment_prefixes: Vec<String>,
    pub docstring_delimiters: Vec<String>,
    pub class_keyword: String,
    pub method_keyword: String,
    /// Lines starting with this keyword continue a previous logical line.
    pub else_if_keyword: Option<String>,
    pub control_keywords: Vec<String>,
    pub line_continuation: String,
}

impl SourceSyntax {
    #[must_use]
    pub fn new(comment_prefixes: Vec<&str>, docstring_delimiters: Vec<&str>) -> Self {
        Self {
            comment_prefixes: comment_prefixes.into_iter().map(String::from).collect(),
            docstring_delimiters: docstring_delimiters.into_iter().map(String::from).collect(),
            class_keyword: "class".to_string(),
            method_keyword: "def".to_string(),
            else_if_keyword: Some("elif".to_string()),
            control_keywords: DEFAULT_CONTROL_KEYWORDS.iter().map(ToString::to_string).collect(),
            line_continuation: "\\".to_string(),
        }
    }

    #[must_use]
    pub fn python() -> Self {
        Self::new(vec!["#"], vec!["\"\"\"", "'''"])
    }

    #[must_use]
    pub fn with_keywords(mut self, class_keyword: &str, method_keyword: &str) -> Self {
        self.class_keyword = class_keyword.to_string();
        self.method_keyword = method_keyword.to_string();
        self
    }

    #[must_use]
    pub fn with_else_if(mut self, keyword: Option<&str>) -> Self {
        self.else_if_keyword = keyword.map(String::from);
        self
    }

    #[must_use]
    pub fn with_control_keywords(mut self, keywords: Vec<&str>) -> Self {
        self.control_keywords = keywords.into_iter().map(String::from).collect();
        self
    }

    /// `class ` with the trailing separator, as matched at the start of a trimmed line.
    #[must_use]
    pub fn class_prefix(&self) -> String {
        format!("{} ", self.class_keyword)
    }

    #[must_use]
    pub fn method_prefix(&self) -> String {
        format!("{} ", self.method_keyword)
    }
}

impl Default for SourceSyntax {
    fn default() -> Self {
        Self::python()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub syntax: SourceSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, syntax: SourceSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            syntax,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for ext in &language.extensions {
            self.extension_map.insert(ext.clone(), idx);
        }
        self.languages.push(language);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(ext)
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// All registered extensions, sorted for stable output.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        let mut exts: Vec<String> = self.extension_map.keys().cloned().collect();
        exts.sort();
        exts
    }

    #[must_use]
    pub fn with_custom_languages(custom: &HashMap<String, CustomLanguageConfig>) -> Self {
        let mut registry = Self::default();

        let mut names: Vec<&String> = custom.keys().collect();
        names.sort();
        for name in names {
            let config = &custom[name];
            let base = SourceSyntax::python();
            let syntax = SourceSyntax {
                comment_prefixes: config
                    .comment_prefixes
                    .clone()
                    .unwrap_or(base.comment_prefixes),
                docstring_delimiters: config
                    .docstring_delimiters
                    .clone()
                    .unwrap_or(base.docstring_delimiters),
                class_keyword: config.class_keyword.clone().unwrap_or(base.class_keyword),
                method_keyword: config.method_keyword.clone().unwrap_or(base.method_keyword),
                else_if_keyword: config.else_if_keyword.clone().or(base.else_if_keyword),
                control_keywords: config
                    .control_keywords
                    .clone()
                    .unwrap_or(base.control_keywords),
                line_continuation: config
                    .line_continuation
                    .clone()
                    .unwrap_or(base.line_continuation),
            };
            registry.register(Language {
                name: name.clone(),
                extensions: config.extensions.clone(),
                syntax,
            });
        }

        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(Language::new(
            "Python",
            vec!["py", "pyi"],
            SourceSyntax::python(),
        ));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
