use crate::profile::ProfileReport;

/// Render the profile as one self-contained HTML document (data embedded as
/// JSON, rendered client-side).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from
/// JS template literals (e.g., `${x}`), which would conflict with Rust
/// formatting. Section navigation is driven by the URL hash, which is why
/// the host side embeds this document behind a data: URI.
pub fn render_html(report: &ProfileReport) -> anyhow::Result<String> {
    let json = serde_json::to_string(report)?; // embedded as JS object literal
    let json = json.replace("</", "<\\/"); // keep the inline <script> intact

    const TEMPLATE: &str = r##"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Data Profile</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; color: #1a1a1a; }
  header { padding: 14px 20px; border-bottom: 1px solid #ddd; display: flex; align-items: baseline; gap: 16px; flex-wrap: wrap; }
  header h1 { margin: 0; font-size: 20px; }
  .muted { color: #777; font-size: 12px; }
  nav { display: flex; gap: 8px; padding: 10px 20px; border-bottom: 1px solid #eee; flex-wrap: wrap; position: sticky; top: 0; background: white; }
  nav a { padding: 6px 12px; border: 1px solid #ddd; background: #f8f8f8; border-radius: 6px; cursor: pointer; text-decoration: none; color: inherit; font-size: 14px; }
  nav a.active { background: #e9f2ff; border-color: #cfe3ff; }
  main { padding: 16px 20px; }
  section { display: none; }
  section.active { display: block; }

  .tiles { display: flex; gap: 12px; flex-wrap: wrap; }
  .tile { border: 1px solid #ddd; border-radius: 8px; padding: 10px 14px; min-width: 130px; background: #fafafa; }
  .tile .value { font-size: 20px; font-weight: 600; font-variant-numeric: tabular-nums; }
  .tile .label { font-size: 12px; color: #666; }

  .cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(340px, 1fr)); gap: 12px; }
  .card { border: 1px solid #ddd; border-radius: 8px; padding: 12px; }
  .card h3 { margin: 0 0 2px 0; font-size: 15px; }
  .badge { display: inline-block; font-size: 11px; padding: 1px 8px; border-radius: 999px; border: 1px solid #cfe3ff; background: #e9f2ff; color: #2b5dab; }
  .badge.categorical { border-color: #ffe2bf; background: #fff3e2; color: #a96310; }
  .badge.boolean { border-color: #d4f0d4; background: #ecf9ec; color: #2c7a2c; }

  table { border-collapse: collapse; width: 100%; margin-top: 8px; }
  th, td { border-bottom: 1px solid #eee; padding: 4px 8px; text-align: left; font-size: 13px; }
  th { background: #fafafa; }
  .num { text-align: right; font-variant-numeric: tabular-nums; }

  .bar-row { display: flex; align-items: center; gap: 8px; font-size: 13px; margin: 2px 0; }
  .bar-row .name { width: 140px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
  .bar-track { flex: 1; background: #f0f0f0; border-radius: 4px; height: 14px; }
  .bar-fill { background: #5b8def; border-radius: 4px; height: 14px; }

  .hist { display: flex; align-items: flex-end; gap: 2px; height: 70px; margin-top: 8px; }
  .hist div { flex: 1; background: #5b8def; border-radius: 2px 2px 0 0; min-height: 1px; }

  .matrix-wrap { overflow-x: auto; }
  .matrix td.cell { width: 40px; height: 28px; text-align: center; font-size: 11px; border: 1px solid #fff; }
  .matrix th { font-size: 11px; }
  .matrix th.rowhead { text-align: right; }

  .nullity td { width: 10px; height: 8px; padding: 0; border: none; }
  .nullity td.present { background: #5b8def; }
  .nullity td.absent { background: #eee; }

  .scatter-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 12px; }
  .scatter { border: 1px solid #ddd; border-radius: 8px; padding: 8px; }
  .scatter svg { width: 100%; height: 220px; }
  .scatter circle { fill: #5b8def; fill-opacity: 0.45; }
</style>
</head>
<body>
<header>
  <h1 id="reportTitle"></h1>
  <span class="muted" id="reportMeta"></span>
</header>
<nav id="nav"></nav>
<main id="main"></main>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

const SECTIONS = [
  ["overview", "Overview"],
  ["variables", "Variables"],
  ["correlations", "Correlations"],
  ["missing", "Missing"],
  ["interactions", "Interactions"],
  ["samples", "Samples"],
];

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function fmt(x) {
  if (x === null || x === undefined) return "";
  if (Number.isInteger(x)) return String(x);
  const a = Math.abs(x);
  if (a !== 0 && (a < 0.001 || a >= 1e6)) return x.toExponential(3);
  return (Math.round(x * 1000) / 1000).toString();
}

function pct(x) {
  return (x * 100).toFixed(1) + "%";
}

function tile(value, label) {
  return `<div class="tile"><div class="value">${value}</div><div class="label">${escapeHtml(label)}</div></div>`;
}

function renderOverview(t) {
  const mb = (t.estimated_size_bytes / (1024 * 1024)).toFixed(2);
  return `<div class="tiles">
    ${tile(t.rows, "Rows")}
    ${tile(t.columns, "Variables")}
    ${tile(t.missing_cells, "Missing cells")}
    ${tile(pct(t.missing_ratio), "Missing ratio")}
    ${tile(t.duplicate_rows, "Duplicate rows")}
    ${tile(mb + " MB", "In-memory size")}
    ${tile(t.numeric_count, "Numeric")}
    ${tile(t.categorical_count, "Categorical")}
    ${tile(t.boolean_count, "Boolean")}
  </div>`;
}

function histogram(h) {
  const peak = Math.max(...h.counts, 1);
  const bars = h.counts
    .map((c, i) => {
      const lo = fmt(h.edges[i]);
      const hi = fmt(h.edges[i + 1]);
      return `<div style="height:${Math.max(1, (c / peak) * 100)}%" title="[${lo}, ${hi}): ${c}"></div>`;
    })
    .join("");
  return `<div class="hist">${bars}</div>`;
}

function statRows(pairs) {
  return pairs
    .map(([k, v]) => `<tr><td>${escapeHtml(k)}</td><td class="num">${v}</td></tr>`)
    .join("");
}

function renderVariables(vars) {
  const cards = vars
    .map((v) => {
      let body = `<table>${statRows([
        ["Count", v.count],
        ["Missing", `${v.missing} (${pct(v.missing_ratio)})`],
        ["Distinct", v.distinct],
      ])}</table>`;

      if (v.numeric) {
        const n = v.numeric;
        body += `<table>${statRows([
          ["Mean", fmt(n.mean)],
          ["Std", fmt(n.std)],
          ["Min / Max", `${fmt(n.min)} / ${fmt(n.max)}`],
          ["Q1 / Median / Q3", `${fmt(n.q1)} / ${fmt(n.median)} / ${fmt(n.q3)}`],
          ["Zeros", n.zeros],
        ])}</table>${histogram(n.histogram)}`;
      }

      if (v.categories) {
        const peak = Math.max(...v.categories.map((c) => c.count), 1);
        body += v.categories
          .map(
            (c) => `<div class="bar-row">
              <span class="name" title="${escapeHtml(c.value)}">${escapeHtml(c.value)}</span>
              <span class="bar-track"><span class="bar-fill" style="display:block;width:${(c.count / peak) * 100}%"></span></span>
              <span class="num">${c.count}</span>
            </div>`
          )
          .join("");
      }

      return `<div class="card">
        <h3>${escapeHtml(v.name)} <span class="badge ${v.kind}">${v.kind}</span></h3>
        ${body}
      </div>`;
    })
    .join("");
  return `<div class="cards">${cards}</div>`;
}

// Blue (-1) through white (0) to red (+1)
function heatColor(v) {
  const t = Math.max(-1, Math.min(1, v));
  const white = [255, 255, 255];
  const end = t < 0 ? [91, 141, 239] : [239, 112, 91];
  const k = Math.abs(t);
  const mix = white.map((w, i) => Math.round(w + (end[i] - w) * k));
  return `rgb(${mix[0]},${mix[1]},${mix[2]})`;
}

function matrixTable(columns, values) {
  const head = columns.map((c) => `<th title="${escapeHtml(c)}">${escapeHtml(c)}</th>`).join("");
  const rows = columns
    .map((rowName, i) => {
      const cells = values[i]
        .map((v, j) => {
          if (v === null || v === undefined) return `<td class="cell"></td>`;
          const label = `${escapeHtml(rowName)} × ${escapeHtml(columns[j])}: ${v.toFixed(3)}`;
          return `<td class="cell" style="background:${heatColor(v)}" title="${label}">${v.toFixed(2)}</td>`;
        })
        .join("");
      return `<tr><th class="rowhead">${escapeHtml(rowName)}</th>${cells}</tr>`;
    })
    .join("");
  return `<div class="matrix-wrap"><table class="matrix"><tr><th></th>${head}</tr>${rows}</table></div>`;
}

function renderCorrelations(matrices) {
  if (!matrices.length) return `<p class="muted">No correlation matrices were computed.</p>`;
  return matrices
    .map((m) => `<h2>${escapeHtml(m.method)}</h2>` + matrixTable(m.columns, m.values))
    .join("");
}

function renderMissing(m) {
  let out = "";
  if (m.bar) {
    const peak = Math.max(...m.bar.map((b) => b.ratio), 0.0001);
    out += `<h2>Missing values per variable</h2>` + m.bar
      .map(
        (b) => `<div class="bar-row">
          <span class="name" title="${escapeHtml(b.name)}">${escapeHtml(b.name)}</span>
          <span class="bar-track"><span class="bar-fill" style="display:block;width:${(b.ratio / peak) * 100}%"></span></span>
          <span class="num">${b.missing} (${pct(b.ratio)})</span>
        </div>`
      )
      .join("");
  }
  if (m.matrix) {
    const rows = m.matrix.rows
      .map(
        (row) =>
          `<tr>${row.map((p) => `<td class="${p ? "present" : "absent"}"></td>`).join("")}</tr>`
      )
      .join("");
    out += `<h2>Nullity matrix</h2>
      <p class="muted">${m.matrix.sampled_rows} of ${m.matrix.total_rows} rows, columns: ${m.matrix.columns.map(escapeHtml).join(", ")}</p>
      <table class="nullity">${rows}</table>`;
  }
  if (m.heatmap) {
    out += `<h2>Nullity correlation</h2>` + matrixTable(m.heatmap.columns, m.heatmap.values);
  }
  return out || `<p class="muted">No missing-data diagrams were computed.</p>`;
}

function scatterSvg(plot) {
  const xs = plot.points.map((p) => p[0]);
  const ys = plot.points.map((p) => p[1]);
  const xMin = Math.min(...xs), xMax = Math.max(...xs);
  const yMin = Math.min(...ys), yMax = Math.max(...ys);
  const xSpan = xMax - xMin || 1;
  const ySpan = yMax - yMin || 1;
  const W = 300, H = 220, PAD = 10;

  const dots = plot.points
    .map((p) => {
      const cx = PAD + ((p[0] - xMin) / xSpan) * (W - 2 * PAD);
      const cy = H - PAD - ((p[1] - yMin) / ySpan) * (H - 2 * PAD);
      return `<circle cx="${cx.toFixed(1)}" cy="${cy.toFixed(1)}" r="2.5"></circle>`;
    })
    .join("");
  return `<svg viewBox="0 0 ${W} ${H}">${dots}</svg>`;
}

function renderInteractions(plots) {
  if (!plots.length) return `<p class="muted">No continuous variable pairs to plot.</p>`;
  const cells = plots
    .map(
      (p) => `<div class="scatter">
        <div class="muted">${escapeHtml(p.x)} × ${escapeHtml(p.y)} (${p.points.length} points)</div>
        ${scatterSvg(p)}
      </div>`
    )
    .join("");
  return `<div class="scatter-grid">${cells}</div>`;
}

function sampleTable(columns, rows) {
  const head = columns.map((c) => `<th>${escapeHtml(c)}</th>`).join("");
  const body = rows
    .map((r) => `<tr>${r.map((c) => `<td>${escapeHtml(c)}</td>`).join("")}</tr>`)
    .join("");
  return `<div class="matrix-wrap"><table><tr>${head}</tr>${body}</table></div>`;
}

function renderSamples(s) {
  return (
    `<h2>First ${s.head.length} rows</h2>` +
    sampleTable(s.columns, s.head) +
    `<h2>Last ${s.tail.length} rows</h2>` +
    sampleTable(s.columns, s.tail)
  );
}

function currentSection() {
  const id = (location.hash || "#overview").slice(1);
  return SECTIONS.some(([key]) => key === id) ? id : "overview";
}

function showSection() {
  const id = currentSection();
  for (const el of document.querySelectorAll("section")) {
    el.classList.toggle("active", el.id === id);
  }
  for (const a of document.querySelectorAll("nav a")) {
    a.classList.toggle("active", a.dataset.target === id);
  }
}

function build() {
  document.title = DATA.title;
  document.getElementById("reportTitle").textContent = DATA.title;
  document.getElementById("reportMeta").textContent = `generated ${DATA.generated_at}`;

  document.getElementById("nav").innerHTML = SECTIONS.map(
    ([key, label]) => `<a href="#${key}" data-target="${key}">${label}</a>`
  ).join("");

  const content = {
    overview: renderOverview(DATA.table),
    variables: renderVariables(DATA.variables),
    correlations: renderCorrelations(DATA.correlations),
    missing: renderMissing(DATA.missing),
    interactions: renderInteractions(DATA.interactions),
    samples: renderSamples(DATA.samples),
  };

  document.getElementById("main").innerHTML = SECTIONS.map(
    ([key]) => `<section id="${key}">${content[key]}</section>`
  ).join("");

  showSection();
}

window.addEventListener("hashchange", showSection);
build();
</script>
</body>
</html>
"##;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
