//! Dashboard Page
//!
//! - GET / - the single dashboard page
//!
//! The page is one embedded HTML document: heading, description, the
//! labeled Germany profile table, the country selector, and the three
//! chart containers. Rendering is delegated to Plotly.js (CDN); a small
//! script fetches the artifacts from the API and wires the selector's
//! change event to the bar-chart endpoint.

use axum::response::Html;

/// GET /
pub async fn dashboard() -> Html<&'static str> {
    Html(PAGE)
}

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Gap Minder Analysis of Germany</title>
    <script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
            background: #222222;
            color: white;
            line-height: 1.5;
        }

        h1 {
            text-align: center;
            color: #636EFA;
            padding: 16px 0;
        }

        .description {
            margin: 0 50px 16px 50px;
            color: #cccccc;
        }

        .table-banner {
            width: 900px;
            margin: 0 auto;
            background: #636EFA;
            color: white;
            padding: 4px 8px;
            font-weight: 600;
        }

        .table-wrap {
            width: 900px;
            height: 400px;
            margin: 0 auto 30px auto;
            overflow-y: auto;
        }

        table {
            width: 100%;
            border-collapse: collapse;
        }

        th {
            background: rgb(210, 210, 210);
            color: black;
            font-weight: bold;
            padding: 6px 10px;
            text-align: left;
            position: sticky;
            top: 0;
        }

        td {
            background: #222222;
            color: white;
            padding: 6px 10px;
            border-bottom: 1px solid #333333;
        }

        .selector {
            padding-left: 30px;
            margin: 12px 0;
        }

        .selector label {
            margin-right: 16px;
            cursor: pointer;
        }

        .chart {
            margin: 0 30px 8px 30px;
        }

        #map-chart {
            height: 450px;
        }
    </style>
</head>
<body>
    <h1>Gap Minder Analysis of Germany</h1>
    <p class="description">Using the gapminder data we take a look at Germany's profile</p>

    <div class="table-banner">Germany</div>
    <div class="table-wrap">
        <table id="profile-table">
            <thead></thead>
            <tbody></tbody>
        </table>
    </div>

    <div id="country-selector" class="selector"></div>

    <div id="bar-chart" class="chart"></div>
    <div id="line-chart" class="chart"></div>
    <div id="map-chart" class="chart"></div>

    <script>
        async function fetchJson(url) {
            const res = await fetch(url);
            if (!res.ok) throw new Error(url + ' -> ' + res.status);
            return res.json();
        }

        async function loadTable() {
            const table = await fetchJson('/api/v1/table');
            const thead = document.querySelector('#profile-table thead');
            const tbody = document.querySelector('#profile-table tbody');

            const header = document.createElement('tr');
            table.columns.forEach(col => {
                const th = document.createElement('th');
                th.textContent = col;
                header.appendChild(th);
            });
            thead.appendChild(header);

            table.rows.forEach(row => {
                const tr = document.createElement('tr');
                table.columns.forEach(col => {
                    const td = document.createElement('td');
                    td.textContent = row[col];
                    tr.appendChild(td);
                });
                tbody.appendChild(tr);
            });
        }

        async function loadSelector() {
            const options = await fetchJson('/api/v1/countries');
            const selector = document.getElementById('country-selector');

            options.countries.forEach(country => {
                const label = document.createElement('label');
                const radio = document.createElement('input');
                radio.type = 'radio';
                radio.name = 'countries';
                radio.value = country;
                radio.checked = country === options.default;
                radio.addEventListener('change', () => updateBarChart(country));
                label.appendChild(radio);
                label.appendChild(document.createTextNode(' ' + country));
                selector.appendChild(label);
            });
        }

        async function updateBarChart(country) {
            const fig = await fetchJson('/api/v1/charts/bar?country=' + encodeURIComponent(country));
            Plotly.react('bar-chart', fig.data, fig.layout);
        }

        async function loadCharts() {
            const bar = await fetchJson('/api/v1/charts/bar');
            Plotly.newPlot('bar-chart', bar.data, bar.layout);

            const line = await fetchJson('/api/v1/charts/line');
            Plotly.newPlot('line-chart', line.data, line.layout);

            const map = await fetchJson('/api/v1/charts/map');
            await Plotly.newPlot('map-chart', map.data, map.layout);
            if (map.frames) {
                Plotly.addFrames('map-chart', map.frames);
            }
        }

        loadTable();
        loadSelector();
        loadCharts();
    </script>
</body>
</html>
"#;
