pub fn render_index(date: &str, today_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{TODAY_COUNT}}", &today_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>健康管理</title>
  <style>
    :root {
      --bg-1: #eef4f8;
      --bg-2: #d7e6f0;
      --ink: #24313a;
      --accent: #2e86ab;
      --accent-warm: #e4572e;
      --accent-cool: #4dabf7;
      --card: #ffffff;
      --shadow: 0 18px 44px rgba(36, 64, 82, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Hiragino Sans", "Noto Sans JP", "Yu Gothic", sans-serif;
      display: grid;
      place-items: start center;
      padding: 28px 16px 44px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 30px;
      display: grid;
      gap: 22px;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    h2 {
      margin: 0 0 10px;
      font-size: 1.15rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(46, 134, 171, 0.1);
      border-radius: 999px;
    }

    .tab {
      flex: 1;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 1rem;
      font-weight: 600;
      color: #5a6b76;
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .panel[hidden] {
      display: none;
    }

    .panel {
      display: grid;
      gap: 20px;
    }

    .big-button {
      appearance: none;
      border: none;
      border-radius: 16px;
      width: 100%;
      padding: 26px;
      font-size: 1.3rem;
      font-weight: 700;
      color: white;
      background: var(--accent);
      cursor: pointer;
      box-shadow: 0 10px 22px rgba(46, 134, 171, 0.35);
    }

    .big-button:active {
      transform: scale(0.98);
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(130px, 1fr));
      gap: 12px;
    }

    .metric {
      background: #f7fafc;
      border: 1px solid rgba(36, 64, 82, 0.08);
      border-radius: 14px;
      padding: 14px;
    }

    .metric .label {
      display: block;
      font-size: 0.8rem;
      color: #73838d;
    }

    .metric .value {
      display: block;
      font-size: 1.7rem;
      font-weight: 700;
      color: var(--accent);
    }

    .today-list {
      display: grid;
      gap: 0;
    }

    .today-entry {
      font-size: 1.25rem;
      font-weight: 600;
      padding: 10px 0;
      border-bottom: 1px solid #e6ecf0;
    }

    .today-entry .seq {
      font-size: 1rem;
      color: #73838d;
      margin-right: 10px;
    }

    .empty {
      color: #73838d;
      font-size: 0.95rem;
    }

    .chart-card {
      background: #f7fafc;
      border: 1px solid rgba(36, 64, 82, 0.08);
      border-radius: 16px;
      padding: 12px;
    }

    svg.chart {
      width: 100%;
      height: 230px;
      display: block;
    }

    .chart-bar {
      fill: var(--accent);
    }

    .chart-bar-value {
      fill: var(--ink);
      font-size: 12px;
    }

    .chart-label {
      fill: #73838d;
      font-size: 11px;
    }

    .chart-grid {
      stroke: rgba(36, 64, 82, 0.1);
    }

    .line-systolic {
      fill: none;
      stroke: var(--accent-warm);
      stroke-width: 2.5;
    }

    .line-diastolic {
      fill: none;
      stroke: var(--accent-cool);
      stroke-width: 2.5;
    }

    .point-systolic {
      fill: var(--accent-warm);
    }

    .point-diastolic {
      fill: var(--accent-cool);
    }

    .legend {
      display: flex;
      gap: 16px;
      font-size: 0.85rem;
      color: #5a6b76;
    }

    .legend .swatch {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 3px;
      margin-right: 5px;
      vertical-align: middle;
    }

    form.bp-form {
      display: grid;
      gap: 12px;
    }

    form.bp-form label {
      display: grid;
      gap: 4px;
      font-size: 0.9rem;
      color: #5a6b76;
    }

    form.bp-form input {
      border: 1px solid #cfdbe3;
      border-radius: 10px;
      padding: 12px;
      font-size: 1.1rem;
    }

    .submit-button {
      appearance: none;
      border: none;
      border-radius: 12px;
      padding: 16px;
      font-size: 1.1rem;
      font-weight: 700;
      color: white;
      background: var(--accent-warm);
      cursor: pointer;
    }

    table.readings {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    table.readings th,
    table.readings td {
      text-align: left;
      padding: 8px 6px;
      border-bottom: 1px solid #e6ecf0;
    }

    table.readings th {
      color: #73838d;
      font-weight: 600;
      font-size: 0.8rem;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.95rem;
      color: #5a6b76;
    }

    .status[data-type="error"] {
      color: #c0392b;
    }

    .status[data-type="ok"] {
      color: #1e8449;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>健康管理</h1>
    </header>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="visits" role="tab" aria-selected="true">トイレ記録</button>
      <button class="tab" type="button" data-tab="readings" role="tab" aria-selected="false">血圧記録</button>
    </div>

    <section class="panel" id="panel-visits">
      <form id="visit-form" method="post" action="/visits">
        <button class="big-button" type="submit">トイレに行った</button>
      </form>

      <div class="metrics">
        <div class="metric">
          <span class="label">日付</span>
          <span class="value" id="visit-date">{{DATE}}</span>
        </div>
        <div class="metric">
          <span class="label">今日の回数</span>
          <span class="value"><span id="today-count">{{TODAY_COUNT}}</span> 回</span>
        </div>
      </div>

      <div>
        <h2>今日の記録</h2>
        <div class="today-list" id="today-list">
          <p class="empty">まだ記録がありません</p>
        </div>
      </div>

      <div>
        <h2>過去7日間</h2>
        <div class="chart-card">
          <svg class="chart" id="weekly-chart" viewBox="0 0 600 230" role="img" aria-label="7日間の回数"></svg>
        </div>
        <div class="metrics">
          <div class="metric">
            <span class="label">週間合計</span>
            <span class="value"><span id="weekly-total">0</span> 回</span>
          </div>
          <div class="metric">
            <span class="label">1日平均</span>
            <span class="value"><span id="weekly-average">0.0</span> 回</span>
          </div>
        </div>
      </div>
    </section>

    <section class="panel" id="panel-readings" hidden>
      <div>
        <h2>血圧を記録</h2>
        <form class="bp-form" id="bp-form">
          <label>収縮期血圧（上）mmHg
            <input type="number" id="bp-systolic" min="60" max="250" value="120" required />
          </label>
          <label>拡張期血圧（下）mmHg
            <input type="number" id="bp-diastolic" min="40" max="150" value="80" required />
          </label>
          <label>脈拍（回/分）
            <input type="number" id="bp-pulse" min="40" max="200" value="70" required />
          </label>
          <label>メモ（任意）
            <input type="text" id="bp-memo" value="" />
          </label>
          <button class="submit-button" type="submit">記録する</button>
        </form>
      </div>

      <div>
        <h2>最新の記録</h2>
        <div class="metrics">
          <div class="metric">
            <span class="label">上</span>
            <span class="value" id="latest-systolic">-</span>
          </div>
          <div class="metric">
            <span class="label">下</span>
            <span class="value" id="latest-diastolic">-</span>
          </div>
          <div class="metric">
            <span class="label">脈拍</span>
            <span class="value" id="latest-pulse">-</span>
          </div>
        </div>
      </div>

      <div>
        <h2>推移グラフ</h2>
        <div class="legend">
          <span><span class="swatch" style="background:#e4572e"></span>上</span>
          <span><span class="swatch" style="background:#4dabf7"></span>下</span>
        </div>
        <div class="chart-card">
          <svg class="chart" id="bp-chart" viewBox="0 0 600 230" role="img" aria-label="血圧の推移"></svg>
        </div>
      </div>

      <div>
        <h2>記録一覧</h2>
        <table class="readings">
          <thead>
            <tr><th>日時</th><th>上</th><th>下</th><th>脈拍</th></tr>
          </thead>
          <tbody id="readings-body">
            <tr><td colspan="4" class="empty">まだ血圧の記録がありません</td></tr>
          </tbody>
        </table>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = {
      visits: document.getElementById('panel-visits'),
      readings: document.getElementById('panel-readings')
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((tab) => {
          const isActive = tab === button;
          tab.classList.toggle('active', isActive);
          tab.setAttribute('aria-selected', String(isActive));
        });
        Object.entries(panels).forEach(([name, panel]) => {
          panel.hidden = name !== button.dataset.tab;
        });
      });
    });

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"]/g, (ch) =>
        ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' })[ch]
      );

    const renderToday = (data) => {
      document.getElementById('visit-date').textContent = data.date;
      document.getElementById('today-count').textContent = data.count;
      const list = document.getElementById('today-list');
      if (!data.entries.length) {
        list.innerHTML = '<p class="empty">まだ記録がありません</p>';
        return;
      }
      list.innerHTML = data.entries
        .map((entry) =>
          `<div class="today-entry"><span class="seq">${entry.seq}.</span>${escapeHtml(entry.label)}</div>`
        )
        .join('');
    };

    const renderWeekly = (data) => {
      document.getElementById('weekly-total').textContent = data.total;
      document.getElementById('weekly-average').textContent = data.average.toFixed(1);

      const width = 600;
      const height = 230;
      const paddingX = 20;
      const paddingBottom = 30;
      const top = 26;
      const max = Math.max(1, ...data.buckets.map((bucket) => bucket.count));
      const slot = (width - paddingX * 2) / data.buckets.length;
      const barWidth = slot * 0.62;

      const bars = data.buckets
        .map((bucket, index) => {
          const barHeight = (bucket.count / max) * (height - top - paddingBottom);
          const x = paddingX + index * slot + (slot - barWidth) / 2;
          const y = height - paddingBottom - barHeight;
          const label = bucket.date.slice(5).replace('-', '/');
          return `
            <rect class="chart-bar" x="${x.toFixed(1)}" y="${y.toFixed(1)}" width="${barWidth.toFixed(1)}" height="${barHeight.toFixed(1)}" rx="4" />
            <text class="chart-bar-value" x="${(x + barWidth / 2).toFixed(1)}" y="${(y - 6).toFixed(1)}" text-anchor="middle">${bucket.count}</text>
            <text class="chart-label" x="${(paddingX + index * slot + slot / 2).toFixed(1)}" y="${height - 10}" text-anchor="middle">${label}</text>`;
        })
        .join('');

      const baseline = `<line class="chart-grid" x1="${paddingX}" y1="${height - paddingBottom}" x2="${width - paddingX}" y2="${height - paddingBottom}" />`;
      document.getElementById('weekly-chart').innerHTML = baseline + bars;
    };

    const renderBpChart = (trend) => {
      const chart = document.getElementById('bp-chart');
      if (!trend.length) {
        chart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">まだデータがありません</text>';
        return;
      }

      const width = 600;
      const height = 230;
      const paddingX = 36;
      const paddingBottom = 30;
      const top = 16;
      const values = trend.flatMap((point) => [point.systolic, point.diastolic]);
      const min = Math.min(...values) - 10;
      const max = Math.max(...values) + 10;
      const range = Math.max(1, max - min);
      const xStep = trend.length > 1 ? (width - paddingX * 2) / (trend.length - 1) : 0;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingBottom - ((value - min) / range) * (height - top - paddingBottom);

      const path = (key) =>
        trend
          .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(1)} ${y(point[key]).toFixed(1)}`)
          .join(' ');

      const points = (key, cls) =>
        trend
          .map((point, index) => `<circle class="${cls}" cx="${x(index).toFixed(1)}" cy="${y(point[key]).toFixed(1)}" r="3.5" />`)
          .join('');

      const labelEvery = trend.length > 6 ? 2 : 1;
      const labels = trend
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index).toFixed(1)}" y="${height - 10}" text-anchor="middle">${escapeHtml(point.label)}</text>`;
        })
        .join('');

      chart.innerHTML = `
        <path class="line-systolic" d="${path('systolic')}" />
        <path class="line-diastolic" d="${path('diastolic')}" />
        ${points('systolic', 'point-systolic')}
        ${points('diastolic', 'point-diastolic')}
        ${labels}`;
    };

    const renderReadings = (data) => {
      const latest = data.latest;
      document.getElementById('latest-systolic').textContent = latest ? latest.systolic : '-';
      document.getElementById('latest-diastolic').textContent = latest ? latest.diastolic : '-';
      document.getElementById('latest-pulse').textContent = latest ? latest.pulse : '-';

      renderBpChart(data.trend);

      const body = document.getElementById('readings-body');
      if (!data.recent.length) {
        body.innerHTML = '<tr><td colspan="4" class="empty">まだ血圧の記録がありません</td></tr>';
        return;
      }
      body.innerHTML = data.recent
        .map(
          (row) =>
            `<tr><td>${escapeHtml(row.datetime)}</td><td>${row.systolic}</td><td>${row.diastolic}</td><td>${row.pulse}</td></tr>`
        )
        .join('');
    };

    const loadToday = async () => {
      const res = await fetch('/api/visits/today');
      if (!res.ok) {
        throw new Error('今日の記録を読み込めません');
      }
      renderToday(await res.json());
    };

    const loadWeekly = async () => {
      const res = await fetch('/api/visits/weekly');
      if (!res.ok) {
        throw new Error('週間データを読み込めません');
      }
      renderWeekly(await res.json());
    };

    const loadReadings = async () => {
      const res = await fetch('/api/readings/recent');
      if (!res.ok) {
        throw new Error('血圧データを読み込めません');
      }
      renderReadings(await res.json());
    };

    const refresh = () =>
      Promise.all([loadToday(), loadWeekly(), loadReadings()]);

    document.getElementById('visit-form').addEventListener('submit', (event) => {
      event.preventDefault();
      (async () => {
        setStatus('保存中...', '');
        const res = await fetch('/api/visits', { method: 'POST' });
        if (!res.ok) {
          throw new Error(await res.text() || '保存に失敗しました');
        }
        const today = await res.json();
        renderToday(today);
        await loadWeekly();
        const last = today.entries[today.entries.length - 1];
        setStatus(`記録しました (${last ? last.label : ''})`, 'ok');
        setTimeout(() => setStatus('', ''), 1500);
      })().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('bp-form').addEventListener('submit', (event) => {
      event.preventDefault();
      (async () => {
        setStatus('保存中...', '');
        const payload = {
          systolic: Number(document.getElementById('bp-systolic').value),
          diastolic: Number(document.getElementById('bp-diastolic').value),
          pulse: Number(document.getElementById('bp-pulse').value),
          memo: document.getElementById('bp-memo').value
        };
        const res = await fetch('/api/readings', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(payload)
        });
        if (!res.ok) {
          throw new Error(await res.text() || '保存に失敗しました');
        }
        const saved = await res.json();
        document.getElementById('bp-memo').value = '';
        await loadReadings();
        setStatus(`記録しました (${saved.systolic}/${saved.diastolic} mmHg)`, 'ok');
        setTimeout(() => setStatus('', ''), 1500);
      })().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
