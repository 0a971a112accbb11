/// Stylesheet of the translation length widget.
pub const TRANSLATION_LENGTH_CSS: &str = r#"
.translation-length {
    color: #aaaaaa;
    font-size: 11px;
    font-family: monospace;
    padding: 0 4px;
    user-select: none;
}

.translation-length .countdown .overflow {
    color: #f36;
    font-weight: bold;
}

.translation-length .translation-vs-original span {
    padding: 0 2px;
}
"#;
