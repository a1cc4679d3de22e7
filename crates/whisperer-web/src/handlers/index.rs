//! The mapping workbench page.

use axum::response::Html;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Data Whisperer — JSON Field Mapping</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<header class="app-header">
    <h1>🔮 Data Whisperer</h1>
    <p class="subtitle">Map fields between JSON structures with automatic suggestions</p>
</header>

<main class="main-content">
    <div id="errorMessage" class="banner banner-error" style="display:none"></div>
    <div id="successMessage" class="banner banner-success" style="display:none"></div>

    <section class="card">
        <div class="card-header">
            <h2>1. Paste your documents</h2>
            <button id="loadExampleBtn" class="btn btn-secondary">Load example</button>
        </div>
        <div class="input-grid">
            <div>
                <label for="sourceJson">Source JSON</label>
                <textarea id="sourceJson" rows="14" spellcheck="false"
                    placeholder='{"customer_id": "CUST-12345", ...}'></textarea>
            </div>
            <div>
                <label for="targetJson">Target JSON schema</label>
                <textarea id="targetJson" rows="14" spellcheck="false"
                    placeholder='{"userId": "", ...}'></textarea>
            </div>
        </div>
        <button id="analyzeBtn" class="btn btn-primary">Analyze &amp; Suggest Mappings</button>
    </section>

    <section id="mappingSection" class="card" style="display:none">
        <div class="card-header">
            <h2>2. Review mappings</h2>
            <div>
                <button id="previewBtn" class="btn btn-secondary">Preview transformation</button>
                <button id="exportBtn" class="btn btn-primary">Export config</button>
            </div>
        </div>
        <table class="mapping-table">
            <thead>
                <tr>
                    <th>Source field</th>
                    <th></th>
                    <th>Target field</th>
                    <th>Transform</th>
                    <th>Confidence</th>
                </tr>
            </thead>
            <tbody id="mappingTableBody"></tbody>
        </table>
    </section>

    <section id="previewSection" class="card" style="display:none">
        <div class="card-header"><h2>3. Preview</h2></div>
        <div class="preview-grid">
            <div>
                <h3>Original</h3>
                <pre id="originalPreview"></pre>
            </div>
            <div>
                <h3>Transformed</h3>
                <pre id="transformedPreview"></pre>
            </div>
        </div>
    </section>
</main>

<div id="exportModal" class="modal" style="display:none">
    <div class="modal-content">
        <div class="modal-header">
            <h2>Mapping configuration</h2>
            <span class="close" title="Close">&times;</span>
        </div>
        <pre id="exportedConfig"></pre>
        <div class="modal-actions">
            <button id="copyConfigBtn" class="btn btn-secondary">📋 Copy to clipboard</button>
            <button id="downloadConfigBtn" class="btn btn-primary">⬇ Download JSON</button>
        </div>
    </div>
</div>

<script src="/static/js/app.js"></script>
</body>
</html>"#;
