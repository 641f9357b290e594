//! CSS styles for the notes page.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --blue: #268bd2;
    --cyan: #2aa198;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 900px;
    margin: 0 auto;
    padding: 1rem;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

h1, h2, h3 { font-weight: 600; }

.nav-bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: center;
    z-index: 100;
}

.nav-bar .spacer { flex: 1; }

.nav-bar button, .btn {
    padding: 0.4rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--accent);
    color: var(--fg);
    cursor: pointer;
    font-family: inherit;
    font-size: 0.9rem;
}

/* Cards */
.card {
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 1rem;
    margin-bottom: 1rem;
}

.card h2 {
    font-size: 0.8rem;
    color: var(--muted);
    font-family: "SF Mono", "Consolas", "Liberation Mono", monospace;
    margin-bottom: 0.5rem;
}

.card p { white-space: pre-wrap; }

.card .links {
    display: flex;
    gap: 1rem;
    margin-top: 0.75rem;
    border-top: 1px dashed var(--border);
    padding-top: 0.5rem;
}

.card .links > div { flex: 1; }
.card .links h3 { font-size: 0.75rem; color: var(--muted); text-transform: uppercase; letter-spacing: 0.05em; }

.empty { color: var(--muted); font-style: italic; }

/* Dialog */
dialog {
    margin: auto;
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 1.5rem;
    background: var(--bg);
    color: var(--fg);
}

dialog::backdrop { background: rgba(0, 43, 54, 0.4); }

dialog form > div {
    display: flex;
    justify-content: flex-end;
    gap: 0.5rem;
    margin-top: 1rem;
}

output { display: block; margin-top: 0.5rem; color: var(--base01); }
"#;
