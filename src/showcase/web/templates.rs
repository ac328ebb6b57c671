//! Page templates, registered by name in [`super::render::Renderer`].
//!
//! Names end in `.html` so minijinja escapes every interpolated value.

pub const BASE: &str = r##"<!doctype html>
<html lang="zh-CN">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% block title %}{{ site.title }}{% endblock %}</title>
</head>
<body>
{% block body %}{% endblock %}
</body>
</html>
"##;

pub const INDEX: &str = r##"{% extends "base.html" %}
{% block body %}
<header class="hero">
  <h1>{{ site.title }}</h1>
  <p>{{ site.subtitle }}</p>
</header>

{% if sections %}
<div id="slider" class="slider">
  {% for s in sections %}
  <section class="slide{% if loop.first %} active{% endif %}{% if s.reverse %} reverse{% endif %}" id="{{ s.id }}">
    <div class="text">
      <h2>{{ s.title }}</h2>
      <p>{{ s.desc }}</p>
      {% if s.bullets %}
      <ul>{% for b in s.bullets %}<li>{{ b }}</li>{% endfor %}</ul>
      {% endif %}
    </div>
    <img src="{{ s.image }}" alt="{{ s.title }}">
  </section>
  {% endfor %}
  <button class="prev" type="button" aria-label="Previous">&lsaquo;</button>
  <button class="next" type="button" aria-label="Next">&rsaquo;</button>
  <div class="dots"></div>
</div>
{% endif %}

<main class="products">
  {% for p in products %}
  <article class="card" id="{{ p.id }}">
    {% if p.tag %}<span class="tag">{{ p.tag }}</span>{% endif %}
    {% if p.badge %}<span class="badge">{{ p.badge }}</span>{% endif %}
    <h3>{{ p.title }}</h3>
    <p>{{ p.desc }}</p>
    <a class="price" href="{{ p.link }}">¥{{ p.price }}</a>
  </article>
  {% else %}
  <p class="empty">Nothing here yet.</p>
  {% endfor %}
</main>
<script src="/static/slider.js"></script>
{% endblock %}
"##;

pub const ADMIN: &str = r##"{% extends "base.html" %}
{% block title %}Products · Admin{% endblock %}
{% block body %}
<nav><a href="/">Site</a> · <strong>Products</strong> · <a href="/admin/sections">Sections</a></nav>
<h1>Products</h1>
<table>
  <tr><th>ID</th><th>Tag</th><th>Title</th><th>Price</th><th>Badge</th><th></th></tr>
  {% for p in products %}
  <tr>
    <td>{{ p.id }}</td><td>{{ p.tag }}</td><td>{{ p.title }}</td><td>{{ p.price }}</td><td>{{ p.badge }}</td>
    <td>
      <a href="/admin/edit/{{ p.id | urlencode }}">Edit</a>
      <form method="post" action="/admin/delete" style="display:inline">
        <input type="hidden" name="pid" value="{{ p.id }}">
        <button type="submit">Delete</button>
      </form>
    </td>
  </tr>
  {% endfor %}
</table>

<h2>Add product</h2>
<form method="post" action="/admin/add">
  <input name="title" placeholder="Title" required>
  <input name="desc" placeholder="Description" required>
  <input name="price" type="number" placeholder="Price" required>
  <input name="tag" placeholder="Tag">
  <input name="badge" placeholder="Badge">
  <input name="link" value="#">
  <button type="submit">Add</button>
</form>
{% endblock %}
"##;

pub const ADMIN_EDIT: &str = r##"{% extends "base.html" %}
{% block title %}Edit {{ product.id }} · Admin{% endblock %}
{% block body %}
<nav><a href="/admin">Back to products</a></nav>
<h1>Edit {{ product.id }}</h1>
<form method="post" action="/admin/edit">
  <input type="hidden" name="pid" value="{{ product.id }}">
  <label>Title <input name="title" value="{{ product.title }}" required></label>
  <label>Description <input name="desc" value="{{ product.desc }}" required></label>
  <label>Price <input name="price" type="number" value="{{ product.price }}" required></label>
  <label>Tag <input name="tag" value="{{ product.tag }}"></label>
  <label>Badge <input name="badge" value="{{ product.badge }}"></label>
  <label>Link <input name="link" value="{{ product.link }}"></label>
  <button type="submit">Save</button>
</form>
{% endblock %}
"##;

pub const ADMIN_SECTIONS: &str = r##"{% extends "base.html" %}
{% block title %}Sections · Admin{% endblock %}
{% block body %}
<nav><a href="/">Site</a> · <a href="/admin">Products</a> · <strong>Sections</strong></nav>
<h1>Sections</h1>
<table>
  <tr><th>ID</th><th>Title</th><th>Bullets</th><th>Image</th><th>Reverse</th><th></th></tr>
  {% for s in sections %}
  <tr>
    <td>{{ s.id }}</td><td>{{ s.title }}</td><td>{{ s.bullets | join(", ") }}</td><td>{{ s.image }}</td>
    <td>{% if s.reverse %}yes{% else %}no{% endif %}</td>
    <td>
      <a href="/admin/sections/edit/{{ s.id | urlencode }}">Edit</a>
      <form method="post" action="/admin/sections/delete" style="display:inline">
        <input type="hidden" name="sid" value="{{ s.id }}">
        <button type="submit">Delete</button>
      </form>
    </td>
  </tr>
  {% endfor %}
</table>

<h2>Add section</h2>
<form method="post" action="/admin/sections/add">
  <input name="title" placeholder="Title" required>
  <input name="desc" placeholder="Description" required>
  <input name="bullets" placeholder="Bullets, comma separated">
  <input name="image" placeholder="/static/img/illus1.png">
  <select name="reverse"><option value="0">Image right</option><option value="1">Image left</option></select>
  <button type="submit">Add</button>
</form>
{% endblock %}
"##;

pub const ADMIN_SECTIONS_EDIT: &str = r##"{% extends "base.html" %}
{% block title %}Edit {{ section.id }} · Admin{% endblock %}
{% block body %}
<nav><a href="/admin/sections">Back to sections</a></nav>
<h1>Edit {{ section.id }}</h1>
<form method="post" action="/admin/sections/edit">
  <input type="hidden" name="sid" value="{{ section.id }}">
  <label>Title <input name="title" value="{{ section.title }}" required></label>
  <label>Description <input name="desc" value="{{ section.desc }}" required></label>
  <label>Bullets <input name="bullets" value="{{ bullets_str }}"></label>
  <label>Image <input name="image" placeholder="{{ section.image }}"></label>
  <select name="reverse">
    <option value="0"{% if not section.reverse %} selected{% endif %}>Image right</option>
    <option value="1"{% if section.reverse %} selected{% endif %}>Image left</option>
  </select>
  <button type="submit">Save</button>
</form>
{% endblock %}
"##;
