//! Server-rendered pages: the visitor queue page and the admin panel.
//!
//! Templates are embedded and use `{{ key }}` placeholders. No internal
//! store detail ever reaches the queue page — a waiting visitor sees
//! only their place in line and the refresh interval.

/// The page shown to visitors still waiting in the queue.
const QUEUE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta http-equiv="refresh" content="{{ refresh_interval }}">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>You are in the queue</title>
  <style>
    body { font-family: system-ui, sans-serif; display: flex; align-items: center;
           justify-content: center; min-height: 100vh; margin: 0; background: #f4f4f5; }
    main { text-align: center; padding: 2rem; }
    .count { font-size: 3rem; font-weight: 700; }
    p { color: #52525b; }
  </style>
</head>
<body>
  <main>
    <h1>You are in the queue</h1>
    <div class="count">{{ visitors_ahead }}</div>
    <p>visitors ahead of you</p>
    <p>This page refreshes automatically every {{ refresh_interval }} seconds.</p>
  </main>
</body>
</html>
"#;

/// The operator panel served at the admin path.
const ADMIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Queue admin</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 32rem; margin: 4rem auto; }
    .count { font-size: 3rem; font-weight: 700; }
    form { display: inline-block; margin-right: 1rem; }
  </style>
</head>
<body>
  <h1>Queue admin</h1>
  <div class="count">{{ backlog }}</div>
  <p>visitors waiting</p>
  <form method="post" action="{{ admin_path }}/permit">
    <input type="number" name="amt" value="1" min="1">
    <button type="submit">Let in</button>
  </form>
  <form method="post" action="{{ admin_path }}/clear_self">
    <button type="submit">Clear my own cookie</button>
  </form>
</body>
</html>
"#;

/// Substitute `{{ key }}` placeholders in a template.
fn render(template: &str, props: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in props {
        out = out.replace(&format!("{{{{ {key} }}}}"), value);
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}

/// Render the queue page for a waiting visitor.
pub fn queue_page(visitors_ahead: i64, refresh_interval_seconds: u64) -> String {
    render(
        QUEUE_PAGE,
        &[
            ("visitors_ahead", visitors_ahead.to_string()),
            ("refresh_interval", refresh_interval_seconds.to_string()),
        ],
    )
}

/// Render the admin panel.
pub fn admin_page(backlog: i64, admin_path: &str) -> String {
    render(
        ADMIN_PAGE,
        &[
            ("backlog", backlog.to_string()),
            ("admin_path", admin_path.to_string()),
        ],
    )
}
