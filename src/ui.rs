use crate::config::Theme;
use crate::journal::{MIN_WORDS, RECOMMENDED_WORDS};

pub fn render_index(theme: &Theme) -> String {
    INDEX_HTML
        .replace("{{PRIMARY}}", &theme.primary)
        .replace("{{SECONDARY}}", &theme.secondary)
        .replace("{{MIN_WORDS}}", &MIN_WORDS.to_string())
        .replace("{{RECOMMENDED_WORDS}}", &RECOMMENDED_WORDS.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Journal</title>
  <style>
    :root {
      --primary: {{PRIMARY}};
      --secondary: {{SECONDARY}};
      --ink: #1f2937;
      --muted: #6b7280;
      --card: rgba(255, 255, 255, 0.95);
      --shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: var(--ink);
      font-family: "Inter", "Roboto", "Helvetica", "Arial", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .subtitle,
    .hint {
      margin: 0;
      color: var(--muted);
    }

    .tabs {
      display: flex;
      gap: 8px;
      flex-wrap: wrap;
    }

    .tab {
      border: 1px solid #e5e7eb;
      background: white;
      border-radius: 999px;
      padding: 8px 18px;
      font: inherit;
      cursor: pointer;
    }

    .tab.active {
      background: var(--primary);
      border-color: var(--primary);
      color: white;
    }

    .panel[hidden] {
      display: none;
    }

    textarea {
      width: 100%;
      min-height: 160px;
      padding: 16px;
      border-radius: 12px;
      border: 1px solid #d1d5db;
      font: inherit;
      resize: vertical;
    }

    .editor-meta {
      display: flex;
      justify-content: space-between;
      color: var(--muted);
      font-size: 0.9rem;
      margin: 8px 0 16px;
    }

    .submit {
      border: none;
      border-radius: 12px;
      padding: 12px 28px;
      font: inherit;
      font-weight: 600;
      color: white;
      background: linear-gradient(135deg, var(--primary) 0%, var(--secondary) 100%);
      cursor: pointer;
    }

    .submit:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .status {
      min-height: 1.2em;
      font-weight: 500;
    }

    .status[data-type="error"] {
      color: #b42318;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .entries {
      display: grid;
      gap: 16px;
    }

    .entry {
      background: white;
      border-radius: 16px;
      padding: 20px;
      box-shadow: 0 2px 10px rgba(0, 0, 0, 0.06);
      display: grid;
      gap: 10px;
    }

    .entry header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .mood {
      color: white;
      border-radius: 999px;
      padding: 4px 14px;
      font-weight: 600;
    }

    .entry p {
      margin: 0;
      line-height: 1.6;
    }

    .delete {
      border: none;
      background: none;
      cursor: pointer;
      color: var(--muted);
      font: inherit;
    }

    .chart-card {
      background: white;
      border-radius: 16px;
      padding: 16px;
      margin-bottom: 20px;
    }

    .chart-card h2 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    .chart-card svg {
      width: 100%;
      height: auto;
    }

    .chart-label {
      fill: #6f6a65;
      font-size: 11px;
    }

    .chart-grid {
      stroke: rgba(0, 0, 0, 0.08);
    }

    .cell-label {
      font-size: 11px;
      fill: #1f2937;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Journal</h1>
      <p class="subtitle">Write, reflect, and watch your moods across the month.</p>
    </header>
    <nav class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="write" role="tab" aria-selected="true">Write Journal</button>
      <button class="tab" type="button" data-tab="history" role="tab" aria-selected="false">Journal History</button>
      <button class="tab" type="button" data-tab="monthly" role="tab" aria-selected="false">Monthly Summary</button>
    </nav>

    <section class="panel" data-panel="write">
      <form id="journal-form">
        <textarea id="journal-text" placeholder="Share your thoughts, feelings, and experiences from today... What's on your mind?"></textarea>
        <div class="editor-meta">
          <span id="counts">0 words &middot; 0 characters</span>
          <span>Min. {{RECOMMENDED_WORDS}} words recommended</span>
        </div>
        <button class="submit" id="submit-btn" type="submit" disabled>Analyze with AI</button>
      </form>
    </section>

    <section class="panel" data-panel="history" hidden>
      <div class="entries" id="entries"></div>
    </section>

    <section class="panel" data-panel="monthly" hidden>
      <div id="charts"></div>
    </section>

    <div class="status" id="status"></div>
  </main>
  <script>
    const MIN_WORDS = {{MIN_WORDS}};
    const textEl = document.getElementById('journal-text');
    const countsEl = document.getElementById('counts');
    const submitBtn = document.getElementById('submit-btn');
    const entriesEl = document.getElementById('entries');
    const chartsEl = document.getElementById('charts');
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = Array.from(document.querySelectorAll('.panel'));
    let entries = [];
    let loading = false;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      }[ch]));

    const api = async (path, options = {}) => {
      const res = await fetch(path, {
        ...options,
        headers: { 'content-type': 'application/json', ...(options.headers || {}) }
      });
      if (res.status === 401) {
        const body = await res.json().catch(() => ({}));
        window.location.assign(body.login_url || '/login');
        throw new Error('Redirecting to sign in...');
      }
      if (!res.ok) {
        const body = await res.json().catch(() => ({}));
        throw new Error(body.error || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const wordCount = (text) => {
      const trimmed = text.trim();
      return trimmed ? trimmed.split(/\s+/).length : 0;
    };

    const updateEditor = () => {
      const words = wordCount(textEl.value);
      countsEl.textContent = `${words} words · ${textEl.value.length} characters`;
      submitBtn.disabled = loading || words < MIN_WORDS;
      submitBtn.textContent = loading ? 'Analyzing Your Entry...' : 'Analyze with AI';
    };

    const renderEntries = () => {
      if (!entries.length) {
        entriesEl.innerHTML = '<p class="hint">No journal entries yet.</p>';
        return;
      }
      entriesEl.innerHTML = entries
        .map((entry) => `
          <article class="entry">
            <header>
              <span class="mood" style="background:${entry.mood_color}">${escapeHtml(entry.mood)}</span>
              <span class="hint">${escapeHtml(entry.timestamp)}</span>
              <button class="delete" type="button" data-id="${escapeHtml(entry.id)}">Delete</button>
            </header>
            <p><strong>Summary.</strong> ${escapeHtml(entry.summary)}</p>
            <p><strong>Reflection.</strong> ${escapeHtml(entry.reflection)}</p>
          </article>`)
        .join('');
    };

    const loadEntries = async () => {
      const data = await api('/api/journal');
      entries = data.entries;
      renderEntries();
    };

    const deleteEntry = async (id) => {
      entries = entries.filter((entry) => entry.id !== id);
      renderEntries();
      await api(`/api/journal/${encodeURIComponent(id)}`, { method: 'DELETE' });
    };

    const mix = (from, to, ratio) => {
      const parse = (hex) => [1, 3, 5].map((i) => parseInt(hex.slice(i, i + 2), 16));
      const a = parse(from);
      const b = parse(to);
      const channel = (i) => Math.round(a[i] + (b[i] - a[i]) * ratio).toString(16).padStart(2, '0');
      return `#${channel(0)}${channel(1)}${channel(2)}`;
    };

    const card = (title, body) => `<div class="chart-card"><h2>${escapeHtml(title)}</h2>${body}</div>`;

    const renderHeatmap = (chart) => {
      const days = chart.xAxis.categories;
      const moods = chart.yAxis.categories;
      const cells = chart.series[0].data;
      if (!cells.length) {
        return card(chart.title, '<p class="hint">No mood data available for this month</p>');
      }
      const cellW = 34;
      const cellH = 28;
      const left = 90;
      const top = 10;
      const width = left + days.length * cellW + 10;
      const height = top + moods.length * cellH + 60;
      const max = Math.max(...cells.map((cell) => cell[2]));
      const { min, minColor, maxColor } = chart.colorAxis;
      const rects = cells
        .map(([x, y, value]) => {
          const ratio = max > min ? (value - min) / (max - min) : 1;
          const cx = left + x * cellW;
          const cy = top + y * cellH;
          return `<rect x="${cx}" y="${cy}" width="${cellW}" height="${cellH}" fill="${mix(minColor, maxColor, ratio)}" stroke="black" />`
            + `<text class="cell-label" x="${cx + cellW / 2}" y="${cy + cellH / 2 + 4}" text-anchor="middle">${value}</text>`;
        })
        .join('');
      const yLabels = moods
        .map((mood, y) => `<text class="chart-label" x="${left - 8}" y="${top + y * cellH + cellH / 2 + 4}" text-anchor="end">${escapeHtml(mood)}</text>`)
        .join('');
      const xLabels = days
        .map((day, x) => `<text class="chart-label" transform="translate(${left + x * cellW + cellW / 2},${top + moods.length * cellH + 12}) rotate(45)">${escapeHtml(day.slice(5))}</text>`)
        .join('');
      return card(chart.title, `<svg viewBox="0 0 ${width} ${height}" role="img">${rects}${yLabels}${xLabels}</svg>`);
    };

    const palette = ['#6366f1', '#10b981', '#f59e0b', '#ef4444', '#3b82f6', '#8b5cf6', '#6b7280'];

    const plotFrame = (categories, max, draw) => {
      const width = 640;
      const height = 260;
      const padX = 44;
      const padY = 34;
      const top = 16;
      const ceiling = Math.max(max, 1);
      const step = categories.length > 1 ? (width - padX * 2) / (categories.length - 1) : 0;
      const band = (width - padX * 2) / Math.max(categories.length, 1);
      const y = (value) => height - padY - (value / ceiling) * (height - top - padY);
      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (ceiling * i) / 4;
        grid += `<line class="chart-grid" x1="${padX}" y1="${y(value)}" x2="${width - padX}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${padX - 8}" y="${y(value) + 4}" text-anchor="end">${Math.round(value * 10) / 10}</text>`;
      }
      const body = draw({ width, height, padX, padY, step, band, y });
      return `<svg viewBox="0 0 ${width} ${height}" role="img">${grid}${body}</svg>`;
    };

    const renderTrend = (chart) => {
      const days = chart.xAxis.categories;
      const max = Math.max(0, ...chart.series.flatMap((series) => series.data));
      const svg = plotFrame(days, max, ({ height, padX, padY, step, y }) => {
        const x = (i) => padX + i * step;
        const lines = chart.series
          .map((series, index) => {
            const color = palette[index % palette.length];
            const path = series.data.map((value, i) => `${i === 0 ? 'M' : 'L'} ${x(i)} ${y(value)}`).join(' ');
            return `<path d="${path}" fill="none" stroke="${color}" stroke-width="2"><title>${escapeHtml(series.name)}</title></path>`;
          })
          .join('');
        const labelEvery = days.length > 10 ? Math.ceil(days.length / 10) : 1;
        const labels = days
          .map((day, i) => (i % labelEvery === 0
            ? `<text class="chart-label" x="${x(i)}" y="${height - padY + 18}" text-anchor="middle">${escapeHtml(day.slice(5))}</text>`
            : ''))
          .join('');
        return lines + labels;
      });
      const legend = chart.series
        .map((series, index) => `<span style="color:${palette[index % palette.length]}">&#9632; ${escapeHtml(series.name)}</span>`)
        .join(' ');
      return card(chart.title, svg + `<p class="hint">${legend}</p>`);
    };

    const renderTotals = (chart) => {
      const moods = chart.xAxis.categories;
      const values = chart.series[0].data;
      const svg = plotFrame(moods, Math.max(0, ...values), ({ height, padX, padY, band, y }) => moods
        .map((mood, i) => {
          const x = padX + i * band + band * 0.15;
          const w = band * 0.7;
          return `<rect x="${x}" y="${y(values[i])}" width="${w}" height="${height - padY - y(values[i])}" fill="${palette[0]}" />`
            + `<text class="chart-label" x="${x + w / 2}" y="${height - padY + 18}" text-anchor="middle">${escapeHtml(mood)}</text>`;
        })
        .join(''));
      return card(chart.title, svg);
    };

    const loadCharts = async () => {
      const data = await api('/api/monthly-summary');
      // null charts mean nothing was loaded; render nothing at all
      chartsEl.innerHTML = [
        data.trend ? renderTrend(data.trend) : '',
        data.heatmap ? renderHeatmap(data.heatmap) : '',
        data.totals ? renderTotals(data.totals) : ''
      ].join('');
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      panels.forEach((panel) => {
        panel.hidden = panel.dataset.panel !== tab;
      });
      if (tab === 'monthly') {
        loadCharts().catch((err) => setStatus(err.message, 'error'));
      }
    };

    const submit = async () => {
      loading = true;
      updateEditor();
      setStatus('', '');
      try {
        const entry = await api('/api/journal', {
          method: 'POST',
          body: JSON.stringify({ journal_text: textEl.value })
        });
        entries = [entry, ...entries];
        renderEntries();
        textEl.value = '';
        setStatus('Your journal entry has been analyzed! Check the "Journal History" tab to see your results.', 'ok');
      } finally {
        loading = false;
        updateEditor();
      }
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });
    textEl.addEventListener('input', () => {
      if (statusEl.dataset.type === 'error') {
        setStatus('', '');
      }
      updateEditor();
    });
    document.getElementById('journal-form').addEventListener('submit', (event) => {
      event.preventDefault();
      submit().catch((err) => setStatus(err.message, 'error'));
    });
    entriesEl.addEventListener('click', (event) => {
      const button = event.target.closest('.delete');
      if (button) {
        deleteEntry(button.dataset.id).catch((err) => setStatus(err.message, 'error'));
      }
    });

    updateEditor();
    loadEntries().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
