// Fixed HTML pages: default document, welcome page, control panel and the
// viewer wrapper around a stored entry.

use chrono::Local;

use crate::ingest::{Ingested, SourceKind};

/// Built-in document used when inline ingestion carries no content, and
/// served at `/`. Stamped with the local time it was generated.
pub fn default_document() -> String {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sample HTML Content</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; background-color: #f5f5f5; }}
        .container {{ background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
        h1 {{ color: #333; border-bottom: 2px solid #007acc; padding-bottom: 10px; }}
        .highlight {{ background-color: #fff3cd; padding: 10px; border-left: 4px solid #ffc107; margin: 20px 0; }}
        .button {{ background-color: #007acc; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>HTML Renderer Demo</h1>
        <p>This page is the built-in document, served when no markup was supplied.</p>
        <div class="highlight">
            <strong>Note:</strong> anything you submit is stored as-is and rendered inside the preview frame.
        </div>
        <ul>
            <li>Styled content with CSS</li>
            <li>Interactive elements</li>
            <li>Images and media</li>
            <li>JavaScript</li>
        </ul>
        <button class="button" onclick="alert('Hello from rendered HTML!')">Click Me!</button>
        <p><em>Current time: {now}</em></p>
    </div>
</body>
</html>"#
    )
}

pub const WELCOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Welcome</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 40px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            min-height: calc(100vh - 80px);
            display: flex;
            justify-content: center;
            align-items: center;
        }
        .welcome { background: rgba(255,255,255,0.1); padding: 40px; border-radius: 15px; max-width: 600px; }
        .feature { margin: 10px 0; padding: 10px; background: rgba(255,255,255,0.1); border-left: 4px solid #fff; border-radius: 8px; }
    </style>
</head>
<body>
    <div class="welcome">
        <h1>HTML Renderer</h1>
        <p>Use the control panel on the left to load content into this preview.</p>
        <div class="feature"><strong>String input:</strong> paste markup into the text area</div>
        <div class="feature"><strong>File upload:</strong> send an .html file from your machine</div>
        <div class="feature"><strong>Samples:</strong> pick one of the files shipped with the server</div>
    </div>
</body>
</html>"#;

pub const CONTROL_PANEL: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>HTML Renderer Control Panel</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 0; background: #f0f0f0; height: 100vh; overflow: hidden; }
        .layout { display: flex; height: 100vh; }
        .controls { width: 40%; padding: 20px; overflow-y: auto; border-right: 2px solid #ddd; box-sizing: border-box; }
        .preview { width: 60%; background: white; display: flex; flex-direction: column; }
        .panel { background: white; padding: 20px; border-radius: 8px; margin-bottom: 20px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }
        h1 { background: #007acc; color: white; padding: 15px; border-radius: 8px; text-align: center; margin-top: 0; }
        h2 { font-size: 18px; margin-top: 0; }
        textarea, input[type=file] { width: 100%; box-sizing: border-box; margin: 10px 0; padding: 10px; border: 1px solid #ddd; border-radius: 4px; }
        textarea { height: 150px; resize: vertical; }
        button { background: #007acc; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; margin: 5px 5px 5px 0; }
        .sample { background: #28a745; padding: 8px 15px; font-size: 14px; }
        .preview-header { background: #007acc; color: white; padding: 10px 20px; font-weight: bold; }
        .preview iframe { flex: 1; width: 100%; border: none; }
        .status { padding: 10px; border-radius: 4px; margin: 10px 0; background: #d4edda; color: #155724; }
        .status.error { background: #f8d7da; color: #721c24; }
    </style>
</head>
<body>
    <div class="layout">
        <div class="controls">
            <h1>HTML Renderer</h1>
            <div class="panel">
                <h2>Render HTML from String</h2>
                <textarea id="htmlContent" placeholder="Enter your HTML content here..."></textarea>
                <button onclick="renderFromString()">Render HTML</button>
            </div>
            <div class="panel">
                <h2>Upload HTML File</h2>
                <input type="file" id="fileInput" accept=".html" />
                <button onclick="uploadFile()">Upload and Render</button>
            </div>
            <div class="panel">
                <h2>Sample Files</h2>
                <button onclick="loadSamples()">Load Available Samples</button>
                <div id="samplesList"></div>
            </div>
            <div id="status" style="display:none"></div>
        </div>
        <div class="preview">
            <div class="preview-header">
                <span id="previewTitle">Preview - select content to render</span>
                <button onclick="refreshPreview()" style="float:right;margin:-5px 0;padding:5px 10px">Refresh</button>
            </div>
            <iframe id="previewFrame" src="/welcome"></iframe>
        </div>
    </div>
    <script>
        function showStatus(message, isError) {
            const el = document.getElementById('status');
            el.className = isError ? 'status error' : 'status';
            el.textContent = message;
            el.style.display = 'block';
            setTimeout(() => { el.style.display = 'none'; }, 3000);
        }

        function showContent(contentId, title) {
            document.getElementById('previewFrame').src = '/content/' + contentId;
            document.getElementById('previewTitle').textContent = title;
        }

        function refreshPreview() {
            const frame = document.getElementById('previewFrame');
            frame.src = frame.src;
        }

        function handleResult(data, title, okMessage) {
            if (data.success) {
                showContent(data.contentId, title(data));
                showStatus(okMessage, false);
            } else {
                showStatus('Error: ' + data.error, true);
            }
        }

        function renderFromString() {
            const content = document.getElementById('htmlContent').value;
            if (!content.trim()) {
                showStatus('Please enter some HTML content', true);
                return;
            }
            fetch('/render-content', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ source: 'string', content: content })
            })
            .then(r => r.json())
            .then(d => handleResult(d, d => 'String Input - ' + d.contentId.substring(0, 8), 'HTML content rendered'))
            .catch(e => showStatus('Error: ' + e.message, true));
        }

        function uploadFile() {
            const input = document.getElementById('fileInput');
            const file = input.files[0];
            if (!file) {
                showStatus('Please select a file', true);
                return;
            }
            const form = new FormData();
            form.append('file', file);
            fetch('/upload-content', { method: 'POST', body: form })
            .then(r => r.json())
            .then(d => {
                handleResult(d, d => 'Uploaded File - ' + d.fileName, 'File uploaded and rendered');
                if (d.success) { input.value = ''; }
            })
            .catch(e => showStatus('Error: ' + e.message, true));
        }

        function loadSamples() {
            fetch('/samples')
            .then(r => r.json())
            .then(data => {
                const list = document.getElementById('samplesList');
                list.textContent = '';
                if (data.files.length === 0) {
                    list.textContent = 'No sample files found.';
                    return;
                }
                data.files.forEach(name => {
                    const button = document.createElement('button');
                    button.className = 'sample';
                    button.textContent = name;
                    button.onclick = () => loadSample(name);
                    list.appendChild(button);
                });
            })
            .catch(e => showStatus('Error loading samples: ' + e.message, true));
        }

        function loadSample(name) {
            fetch('/samples-content/' + encodeURIComponent(name))
            .then(r => r.json())
            .then(d => handleResult(d, d => 'Sample File - ' + d.fileName, 'Sample loaded'))
            .catch(e => showStatus('Error: ' + e.message, true));
        }

        window.onload = loadSamples;
    </script>
</body>
</html>"#;

/// Page that frames `/content/{id}` with a header and navigation buttons.
pub fn viewer_page(ingested: &Ingested) -> String {
    let (title, label, frame_title) = match (ingested.kind, ingested.file_name.as_deref()) {
        (SourceKind::Upload, Some(name)) => (
            "HTML Renderer - Uploaded File",
            format!("Uploaded: {}", escape_html(name)),
            "Uploaded HTML Content",
        ),
        (SourceKind::Sample, Some(name)) => (
            "HTML Renderer - Sample File",
            format!("Sample: {}", escape_html(name)),
            "Sample HTML Content",
        ),
        _ => (
            "HTML Renderer",
            format!("Content ID: {}", ingested.id),
            "Rendered HTML Content",
        ),
    };
    let id = ingested.id;

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <style>
        body {{ margin: 0; padding: 0; font-family: Arial, sans-serif; }}
        .header {{ background: #007acc; color: white; padding: 10px; text-align: center; }}
        .frame {{ width: 100%; height: calc(100vh - 60px); }}
        iframe {{ width: 100%; height: 100%; border: none; }}
        .nav {{ position: fixed; top: 10px; right: 10px; z-index: 1000; }}
        .nav button {{ background: rgba(0,0,0,0.7); color: white; border: none; padding: 5px 10px; margin: 2px; border-radius: 3px; cursor: pointer; }}
    </style>
</head>
<body>
    <div class="header">
        <h2>HTML Renderer - {label}</h2>
    </div>
    <div class="nav">
        <button onclick="window.location.href='/control'">Back to Control Panel</button>
        <button onclick="var f = document.querySelector('iframe'); f.src = f.src">Refresh</button>
    </div>
    <div class="frame">
        <iframe src="/content/{id}" title="{frame_title}"></iframe>
    </div>
</body>
</html>"#
    )
}

/// Escape text for use inside element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
