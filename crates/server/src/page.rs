/// The dashboard shell. Plotly comes from its CDN; everything else is
/// inline so the binary serves a single self-contained page.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Transactions Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  body { font-family: system-ui, sans-serif; margin: 2rem; color: #222; }
  h1 { color: #1c5d99; margin-bottom: 1.5rem; }
  h3 { margin-top: 1.5rem; }
  table { border-collapse: collapse; margin-bottom: 1rem; }
  th, td { padding: 0.3rem 0.8rem; text-align: left; }
  tr:nth-child(even) { background-color: lightgray; }
  .pies { display: flex; flex-wrap: wrap; }
  .pies > div { flex: 1 1 480px; }
</style>
</head>
<body>
<h1>Transactions Dashboard</h1>
<h3>Data snapshot</h3>
<div id="previews"></div>
<div id="time-series" style="height: 450px;"></div>
<div class="pies">
  <div id="income-pie" style="height: 420px;"></div>
  <div id="expense-pie" style="height: 420px;"></div>
</div>
<script>
const FLOW_COLORS = { inflow: "green", outflow: "red" };

function previewTable(preview) {
  const rows = preview.rows.map(r =>
    `<tr><td>${r.date}</td><td>${r.amount.toFixed(2)}</td><td>${r.description}</td></tr>`
  ).join("");
  return `<h3>${preview.account}</h3>
    <table><thead><tr><th>Date</th><th>Amount</th><th>Description</th></tr></thead>
    <tbody>${rows}</tbody></table>`;
}

function drawSeries(series) {
  Plotly.newPlot("time-series", [{
    type: "bar",
    x: series.map(p => p.date),
    y: series.map(p => p.amount),
    customdata: series.map(p => p.label),
    marker: { color: series.map(p => FLOW_COLORS[p.flow]) },
    hovertemplate: "Date: %{x}<br>Amount: %{y}<br>Description: %{customdata}<extra></extra>",
  }], { title: { text: "Transactions Over Time" }, showlegend: false });
}

function drawPie(element, slices, title) {
  Plotly.newPlot(element, [{
    type: "pie",
    labels: slices.map(s => s.label),
    values: slices.map(s => s.value),
    hovertemplate: "Description: %{label}<br>Total: %{value}<extra></extra>",
  }], { title: { text: title }, showlegend: true });
}

fetch("/api/dashboard")
  .then(response => response.json())
  .then(data => {
    document.getElementById("previews").innerHTML =
      data.previews.map(previewTable).join("");
    drawSeries(data.series);
    drawPie("income-pie", data.income, "Income by Category");
    drawPie("expense-pie", data.expenses, "Expenses by Category");
  });
</script>
</body>
</html>
"#;
