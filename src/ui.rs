pub fn index_page() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Architect</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #0b1020;
      --bg-2: #151b35;
      --ink: #e7e9f4;
      --muted: #9aa1bd;
      --accent: #7c3aed;
      --accent-2: #06b6d4;
      --success: #10b981;
      --danger: #f87171;
      --card: rgba(21, 27, 53, 0.82);
      --shadow: 0 24px 60px rgba(4, 8, 24, 0.55);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(160deg, var(--bg-1), #101730 55%, #0c1226 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px 64px;
      overflow-x: hidden;
    }

    .bg-particles {
      position: fixed;
      inset: 0;
      pointer-events: none;
      overflow: hidden;
      z-index: 0;
    }

    .particle {
      position: absolute;
      bottom: -10px;
      border-radius: 50%;
      animation: float linear infinite;
    }

    @keyframes float {
      from {
        transform: translateY(0);
        opacity: 0.9;
      }
      to {
        transform: translateY(-110vh);
        opacity: 0;
      }
    }

    .app {
      position: relative;
      z-index: 1;
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      border: 1px solid rgba(124, 58, 237, 0.18);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
      background: linear-gradient(90deg, #a78bfa, #67e8f9);
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .input-section {
      display: grid;
      gap: 16px;
    }

    label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    input[type="text"] {
      width: 100%;
      background: rgba(11, 16, 32, 0.7);
      border: 1px solid rgba(124, 58, 237, 0.35);
      border-radius: 14px;
      color: var(--ink);
      font-size: 1rem;
      font-family: inherit;
      padding: 14px 16px;
    }

    input[type="text"]:focus {
      outline: none;
      border-color: var(--accent-2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-generate {
      background: linear-gradient(90deg, var(--accent), var(--accent-2));
      color: white;
      box-shadow: 0 10px 24px rgba(124, 58, 237, 0.35);
    }

    .btn-generate:disabled {
      opacity: 0.7;
      cursor: wait;
    }

    .btn-content {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .btn-loader {
      display: none;
      align-items: center;
      gap: 10px;
    }

    .spinner {
      width: 18px;
      height: 18px;
      border-radius: 50%;
      border: 3px solid rgba(255, 255, 255, 0.35);
      border-top-color: white;
      animation: spin 800ms linear infinite;
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }

    .error-container {
      display: none;
      align-items: center;
      gap: 10px;
      background: rgba(248, 113, 113, 0.12);
      border: 1px solid rgba(248, 113, 113, 0.4);
      border-radius: 14px;
      padding: 14px 16px;
      color: var(--danger);
    }

    .results {
      display: none;
      gap: 24px;
    }

    .summary {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .summary-card {
      background: rgba(11, 16, 32, 0.6);
      border: 1px solid rgba(124, 58, 237, 0.25);
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 8px;
    }

    .summary-card .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .summary-card .value {
      font-size: 1.1rem;
      font-weight: 600;
    }

    .duration {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .timeline {
      display: grid;
      gap: 18px;
    }

    .timeline-step {
      display: flex;
      gap: 16px;
      align-items: flex-start;
    }

    .step-dot {
      flex: 0 0 auto;
      width: 40px;
      height: 40px;
      border-radius: 50%;
      display: grid;
      place-items: center;
      font-weight: 600;
      background: linear-gradient(135deg, var(--accent), var(--accent-2));
      color: white;
    }

    .step-card {
      flex: 1;
      background: rgba(11, 16, 32, 0.6);
      border: 1px solid rgba(6, 182, 212, 0.2);
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 10px;
    }

    .step-number {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--accent-2);
    }

    .step-title {
      margin: 0;
      font-size: 1.2rem;
    }

    .step-description {
      margin: 0;
      color: var(--muted);
      line-height: 1.5;
    }

    .habit-formula {
      background: rgba(124, 58, 237, 0.12);
      border-radius: 12px;
      padding: 12px 14px;
      display: grid;
      gap: 6px;
    }

    .formula-label {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .formula-parts {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      align-items: baseline;
    }

    .formula-keyword {
      color: var(--accent-2);
      font-weight: 600;
    }

    .celebration-badge {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      color: var(--success);
      font-size: 0.95rem;
    }

    .motivation-card {
      display: none;
      background: rgba(16, 185, 129, 0.1);
      border: 1px solid rgba(16, 185, 129, 0.35);
      border-radius: 18px;
      padding: 18px;
    }

    .motivation-text {
      margin: 0;
      line-height: 1.6;
    }

    .result-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .btn-copy {
      background: rgba(6, 182, 212, 0.15);
      border: 1px solid rgba(6, 182, 212, 0.45);
      color: var(--accent-2);
    }

    .btn-reset {
      background: rgba(255, 255, 255, 0.06);
      border: 1px solid rgba(255, 255, 255, 0.18);
      color: var(--ink);
    }

    .copy-toast {
      position: fixed;
      left: 50%;
      bottom: 28px;
      transform: translate(-50%, 16px);
      background: rgba(16, 185, 129, 0.95);
      color: #06281c;
      font-weight: 600;
      padding: 12px 20px;
      border-radius: 999px;
      opacity: 0;
      transition: opacity 400ms ease, transform 400ms ease;
      z-index: 10;
    }

    .copy-toast.show {
      opacity: 1;
      transform: translate(-50%, 0);
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <div class="bg-particles" id="bgParticles"></div>

  <main class="app">
    <header>
      <h1>Habit Architect</h1>
      <p class="subtitle">Break a bad habit with a five-step Tiny Habits plan.</p>
    </header>

    <section class="input-section" id="inputSection">
      <div>
        <label for="badHabit">Bad habit to break</label>
        <input type="text" id="badHabit" placeholder="e.g. doomscrolling before bed" />
      </div>
      <div>
        <label for="goal">Your goal</label>
        <input type="text" id="goal" placeholder="e.g. read more books" />
      </div>
      <button class="btn-generate" id="generateBtn" type="button">
        <span class="btn-content">Build my plan</span>
        <span class="btn-loader"><span class="spinner"></span> Designing your plan...</span>
      </button>
    </section>

    <div class="error-container" id="errorContainer">
      <span>⚠️</span>
      <span id="errorMessage"></span>
    </div>

    <section class="results" id="resultsSection">
      <div class="summary">
        <div class="summary-card">
          <span class="label">Bad habit</span>
          <span class="value" id="summaryHabit"></span>
        </div>
        <div class="summary-card">
          <span class="label">Goal</span>
          <span class="value" id="summaryGoal"></span>
        </div>
      </div>
      <span class="duration" id="durationText"></span>

      <div class="timeline" id="stepsTimeline"></div>

      <div class="motivation-card" id="motivationCard">
        <p class="motivation-text" id="motivationText"></p>
      </div>

      <div class="result-actions">
        <button class="btn-copy" id="copyBtn" type="button">Copy plan</button>
        <button class="btn-reset" id="resetBtn" type="button">Start over</button>
      </div>
    </section>
  </main>

  <script>
    const badHabitEl = document.getElementById('badHabit');
    const goalEl = document.getElementById('goal');
    const generateBtn = document.getElementById('generateBtn');
    const errorContainer = document.getElementById('errorContainer');
    const errorMessage = document.getElementById('errorMessage');
    const resultsSection = document.getElementById('resultsSection');
    const motivationCard = document.getElementById('motivationCard');

    let lastPlanData = null;

    const initParticles = () => {
      const container = document.getElementById('bgParticles');
      if (!container) return;
      const colors = [
        'rgba(124, 58, 237, 0.6)',
        'rgba(6, 182, 212, 0.5)',
        'rgba(167, 139, 250, 0.4)',
        'rgba(103, 232, 249, 0.4)',
        'rgba(16, 185, 129, 0.3)'
      ];
      for (let i = 0; i < 40; i += 1) {
        const particle = document.createElement('div');
        particle.classList.add('particle');
        particle.style.left = Math.random() * 100 + '%';
        particle.style.animationDelay = Math.random() * 8 + 's';
        particle.style.animationDuration = (6 + Math.random() * 6) + 's';
        particle.style.width = (2 + Math.random() * 3) + 'px';
        particle.style.height = particle.style.width;
        particle.style.background = colors[Math.floor(Math.random() * colors.length)];
        container.appendChild(particle);
      }
    };

    const escapeHtml = (text) => {
      const div = document.createElement('div');
      div.textContent = text;
      return div.innerHTML;
    };

    const showError = (message) => {
      errorMessage.textContent = message;
      errorContainer.style.display = 'flex';
    };

    const setBusy = (busy) => {
      generateBtn.disabled = busy;
      generateBtn.querySelector('.btn-content').style.display = busy ? 'none' : 'flex';
      generateBtn.querySelector('.btn-loader').style.display = busy ? 'flex' : 'none';
    };

    const renderResults = (data) => {
      document.getElementById('summaryHabit').textContent = data.bad_habit;
      document.getElementById('summaryGoal').textContent = data.goal;
      document.getElementById('durationText').textContent = `Generated in ${data.duration}s`;

      const timeline = document.getElementById('stepsTimeline');
      timeline.innerHTML = '';
      data.plan.forEach((step) => {
        const stepEl = document.createElement('div');
        stepEl.className = 'timeline-step';
        stepEl.innerHTML = `
          <div class="step-dot step-${step.step_number}">${step.step_number}</div>
          <div class="step-card">
            <span class="step-number">Step ${step.step_number}</span>
            <h3 class="step-title">${escapeHtml(step.title)}</h3>
            <p class="step-description">${escapeHtml(step.description)}</p>
            <div class="habit-formula">
              <div class="formula-label">Tiny Habit Recipe</div>
              <div class="formula-parts">
                <span class="formula-keyword">After I</span>
                <span>${escapeHtml(step.anchor)}</span>
                <span>→</span>
                <span class="formula-keyword">I will</span>
                <span>${escapeHtml(step.tiny_behavior)}</span>
              </div>
            </div>
            <div class="celebration-badge">🎉 Celebrate: ${escapeHtml(step.celebration)}</div>
          </div>
        `;
        timeline.appendChild(stepEl);
      });

      if (data.motivation) {
        document.getElementById('motivationText').textContent = data.motivation;
        motivationCard.style.display = 'block';
      }

      resultsSection.style.display = 'grid';
      setTimeout(() => {
        resultsSection.scrollIntoView({ behavior: 'smooth', block: 'start' });
      }, 100);
    };

    const generatePlan = async () => {
      const badHabit = badHabitEl.value.trim();
      const goal = goalEl.value.trim();

      if (!badHabit) {
        showError('Please enter a bad habit you want to break.');
        badHabitEl.focus();
        return;
      }
      if (!goal) {
        showError('Please enter your goal.');
        goalEl.focus();
        return;
      }

      errorContainer.style.display = 'none';
      resultsSection.style.display = 'none';
      setBusy(true);

      try {
        const response = await fetch('/api/generate', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ bad_habit: badHabit, goal: goal })
        });

        if (!response.ok) {
          const errData = await response.json().catch(() => ({}));
          throw new Error(errData.detail || `Server error (${response.status})`);
        }

        const data = await response.json();
        lastPlanData = data;
        renderResults(data);
      } catch (err) {
        showError(err.message || 'Something went wrong. Please try again.');
      } finally {
        setBusy(false);
      }
    };

    const resetForm = () => {
      badHabitEl.value = '';
      goalEl.value = '';
      resultsSection.style.display = 'none';
      errorContainer.style.display = 'none';
      motivationCard.style.display = 'none';
      lastPlanData = null;
      document.getElementById('inputSection').scrollIntoView({ behavior: 'smooth', block: 'start' });
      badHabitEl.focus();
    };

    const showToast = (message) => {
      const existing = document.querySelector('.copy-toast');
      if (existing) existing.remove();

      const toast = document.createElement('div');
      toast.className = 'copy-toast';
      toast.textContent = message;
      document.body.appendChild(toast);

      requestAnimationFrame(() => {
        requestAnimationFrame(() => toast.classList.add('show'));
      });

      setTimeout(() => {
        toast.classList.remove('show');
        setTimeout(() => toast.remove(), 400);
      }, 2500);
    };

    const copyPlan = () => {
      if (!lastPlanData) return;

      const d = lastPlanData;
      let text = '🧠 HABIT ARCHITECT — Your Tiny Habits Plan\n';
      text += '═'.repeat(50) + '\n\n';
      text += `❌ Bad Habit: ${d.bad_habit}\n`;
      text += `⭐ Goal: ${d.goal}\n\n`;

      d.plan.forEach((step) => {
        text += `── Step ${step.step_number}: ${step.title} ──\n`;
        text += `${step.description}\n\n`;
        text += '📌 Tiny Habit Recipe:\n';
        text += `   After I ${step.anchor} → I will ${step.tiny_behavior}\n\n`;
        text += `🎉 Celebrate: ${step.celebration}\n\n`;
      });

      if (d.motivation) {
        text += '─'.repeat(50) + '\n';
        text += `🔥 ${d.motivation}\n`;
      }

      navigator.clipboard.writeText(text).then(() => {
        showToast('Plan copied to clipboard!');
      }).catch(() => {
        const textarea = document.createElement('textarea');
        textarea.value = text;
        document.body.appendChild(textarea);
        textarea.select();
        document.execCommand('copy');
        document.body.removeChild(textarea);
        showToast('Plan copied to clipboard!');
      });
    };

    initParticles();
    generateBtn.addEventListener('click', () => { generatePlan(); });
    document.getElementById('copyBtn').addEventListener('click', copyPlan);
    document.getElementById('resetBtn').addEventListener('click', resetForm);
    [badHabitEl, goalEl].forEach((input) => {
      input.addEventListener('keydown', (event) => {
        if (event.key === 'Enter') {
          event.preventDefault();
          generatePlan();
        }
      });
    });
  </script>
</body>
</html>
"##;
