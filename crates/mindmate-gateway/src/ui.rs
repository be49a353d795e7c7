//! Embedded chat page: a single static HTML file served at `/`.

/// The chat UI. Talks to the JSON API with plain `fetch`; no build step.
pub fn chat_page_html() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>MindMate</title>
<style>
  :root { --bg:#f4f6f8; --card:#ffffff; --accent:#4f7cac; --user:#dcebf7; --bot:#eef1f4; }
  * { box-sizing: border-box; }
  body { margin:0; font-family: system-ui, sans-serif; background:var(--bg); color:#243342; }
  main { max-width:720px; margin:0 auto; padding:16px; display:flex; flex-direction:column; height:100vh; }
  header { display:flex; align-items:center; justify-content:space-between; }
  h1 { font-size:1.2rem; margin:8px 0; }
  #mood { display:flex; gap:6px; }
  #mood button { border:none; background:var(--card); border-radius:8px; padding:6px 10px; cursor:pointer; font-size:1rem; }
  #mood button:hover { background:var(--user); }
  #messages { flex:1; overflow-y:auto; background:var(--card); border-radius:12px; padding:16px; margin:8px 0; }
  .msg { max-width:80%; margin:6px 0; padding:10px 14px; border-radius:12px; white-space:pre-wrap; }
  .user { background:var(--user); margin-left:auto; }
  .assistant { background:var(--bot); }
  .meta { font-size:0.75rem; color:#7a8a99; margin-top:2px; }
  form { display:flex; gap:8px; }
  input[type=text] { flex:1; padding:12px; border:1px solid #cfd8e0; border-radius:8px; font-size:1rem; }
  button[type=submit] { background:var(--accent); color:#fff; border:none; border-radius:8px; padding:0 20px; cursor:pointer; }
  #exercises { font-size:0.85rem; color:#55677a; padding:4px 0 12px; }
</style>
</head>
<body>
<main>
  <header>
    <h1>MindMate</h1>
    <div id="mood" title="How are you feeling right now?">
      <button data-mood="1">😞</button><button data-mood="2">🙁</button>
      <button data-mood="3">😐</button><button data-mood="4">🙂</button>
      <button data-mood="5">😄</button>
    </div>
  </header>
  <div id="messages"></div>
  <div id="exercises"></div>
  <form id="chat">
    <input id="input" type="text" placeholder="What's on your mind?" autocomplete="off">
    <button type="submit">Send</button>
  </form>
</main>
<script>
let sessionId = null;

async function ensureSession() {
  if (sessionId) return sessionId;
  const res = await fetch('/api/chat/sessions', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({title: 'Chat ' + new Date().toLocaleString()})
  });
  const session = await res.json();
  sessionId = session.id;
  return sessionId;
}

function append(role, text, meta) {
  const box = document.getElementById('messages');
  const div = document.createElement('div');
  div.className = 'msg ' + role;
  div.textContent = text;
  if (meta) {
    const m = document.createElement('div');
    m.className = 'meta';
    m.textContent = meta;
    div.appendChild(m);
  }
  box.appendChild(div);
  box.scrollTop = box.scrollHeight;
}

document.getElementById('chat').addEventListener('submit', async (e) => {
  e.preventDefault();
  const input = document.getElementById('input');
  const content = input.value.trim();
  if (!content) return;
  input.value = '';
  append('user', content);

  const id = await ensureSession();
  const res = await fetch(`/api/chat/sessions/${id}/messages`, {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({content})
  });
  if (!res.ok) { append('assistant', 'Something went wrong, please try again.'); return; }
  const reply = await res.json();
  append('assistant', reply.assistantMessage.content,
    reply.concernLevel !== 'low' ? 'concern: ' + reply.concernLevel : '');
  const ex = document.getElementById('exercises');
  ex.textContent = (reply.suggestedExercises && reply.suggestedExercises.length)
    ? 'Suggested: ' + reply.suggestedExercises.join(', ') : '';
});

document.getElementById('mood').addEventListener('click', async (e) => {
  const mood = e.target.dataset && e.target.dataset.mood;
  if (!mood) return;
  const id = await ensureSession();
  await fetch('/api/mood', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({sessionId: id, mood: Number(mood)})
  });
  append('assistant', 'Thanks for checking in. Your mood has been recorded.');
});

append('assistant', "Hi, I'm MindMate. I'm here to listen. How are you feeling today?");
</script>
</body>
</html>
"#
}
