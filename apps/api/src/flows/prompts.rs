// All LLM prompt constants for the content flows.
// Templates use {placeholder} substitution — fill every placeholder before
// sending. Systems enforce JSON-only output so generate_json can parse the
// reply directly.

/// System prompt for YouTube script generation.
pub const YOUTUBE_SCRIPT_SYSTEM: &str = "You are a YouTube scriptwriter expert. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// YouTube script prompt. Replace `{topic}`, `{tone}`, `{script_length}`.
pub const YOUTUBE_SCRIPT_PROMPT_TEMPLATE: &str = r#"Generate a complete YouTube video script based on the given topic, considering the specified tone and script length.

Topic: {topic}
Tone: {tone}
Script Length: {script_length}

Return a JSON object with this EXACT schema:
{"script": "the full script text"}"#;

/// System prompt for Instagram reel scripts.
pub const REEL_SCRIPT_SYSTEM: &str = "You are an expert in creating engaging short-form \
    video scripts for platforms like Instagram Reels. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Reel script prompt. Replace `{topic}`, `{trending_song}`, `{style}`.
pub const REEL_SCRIPT_PROMPT_TEMPLATE: &str = r#"Write a short, punchy reel script with a strong hook in the first two seconds.

Topic: {topic}
Trending Song: {trending_song}
Style: {style}

Return a JSON object with this EXACT schema:
{"script": "the full reel script"}"#;

/// System prompt for script improvement.
pub const IMPROVE_SCRIPT_SYSTEM: &str = "You are an expert scriptwriter, skilled at \
    improving the clarity, emotion, and flow of existing scripts. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Script improvement prompt. Replace `{script}`, `{tone}`.
pub const IMPROVE_SCRIPT_PROMPT_TEMPLATE: &str = r#"Improve the following script: tighten the pacing, strengthen the hook, and keep the author's voice. Desired tone: {tone}.

SCRIPT:
{script}

Return a JSON object with this EXACT schema:
{"improved_script": "the improved script text"}"#;

/// System prompt for social captions.
pub const CAPTION_SYSTEM: &str = "You are a social media copywriter who crafts \
    scroll-stopping captions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Caption prompt. Replace `{topic}`, `{tone}`, `{platform}`, `{emojis}`.
pub const CAPTION_PROMPT_TEMPLATE: &str = r#"Write one caption for the platform below. Match the platform's conventions (length, hashtag usage, line breaks) and the requested tone. Work in these extra emojis where natural: {emojis}

Topic: {topic}
Tone: {tone}
Platform: {platform}

Return a JSON object with this EXACT schema:
{"caption": "the caption text"}"#;

/// System prompt for hashtag generation.
pub const HASHTAG_SYSTEM: &str = "You are an expert in social media growth and hashtag \
    strategy. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Hashtag prompt. Replace `{topic}`, `{tone}`, `{levels}`.
pub const HASHTAG_PROMPT_TEMPLATE: &str = r##"Generate hashtags for the topic below, grouped by popularity tier. Only fill the requested tiers ({levels}); return empty arrays for the rest. 8-12 hashtags per requested tier, each starting with '#'.

Topic: {topic}
Tone: {tone}

Return a JSON object with this EXACT schema:
{"hashtags": {"low": ["#a"], "medium": ["#b"], "viral": ["#c"]}}"##;

/// System prompt for YouTube title ideas.
pub const YOUTUBE_TITLE_SYSTEM: &str = "You are a YouTube growth expert who writes \
    click-worthy, honest titles. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// YouTube title prompt. Replace `{topic}`.
pub const YOUTUBE_TITLE_PROMPT_TEMPLATE: &str = r#"Generate 5-8 clickbait-friendly but accurate YouTube titles for this topic.

Topic: {topic}

Return a JSON object with this EXACT schema:
{"titles": ["title one", "title two"]}"#;

/// System prompt for YouTube descriptions.
pub const YOUTUBE_DESCRIPTION_SYSTEM: &str = "You are an SEO expert writing YouTube video \
    descriptions that rank. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// YouTube description prompt. Replace `{topic}`, `{script}`, `{example_links}`.
pub const YOUTUBE_DESCRIPTION_PROMPT_TEMPLATE: &str = r#"Write an SEO-optimized YouTube description for the video below: a strong first line, keyword-rich summary, and a call to subscribe. Include the provided links if any.

Topic: {topic}
Script (may be empty): {script}
Links to include (may be empty): {example_links}

Return a JSON object with this EXACT schema:
{"description": "the full description"}"#;

/// System prompt for chapter generation.
pub const CHAPTERS_SYSTEM: &str = "You are a video editor who segments scripts into \
    chapters with timestamps. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Chapters prompt. Replace `{script}`.
pub const CHAPTERS_PROMPT_TEMPLATE: &str = r#"Segment this script into 4-8 chapters. Estimate each chapter's start time from a natural speaking pace. Timestamps are "MM:SS" and the first chapter starts at "00:00".

SCRIPT:
{script}

Return a JSON object with this EXACT schema:
{"chapters": [{"timestamp": "00:00", "title": "Intro"}]}"#;

/// System prompt for video idea generation.
pub const VIDEO_IDEAS_SYSTEM: &str = "You are a content strategist who finds video ideas \
    that fit a creator's niche. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Video ideas prompt. Replace `{niche}`, `{trending_topics}`, `{past_video_types}`.
pub const VIDEO_IDEAS_PROMPT_TEMPLATE: &str = r#"Generate 8-10 specific video ideas for this creator. Favor ideas that build on what already worked for them and on current trends.

Niche: {niche}
Trending topics (may be empty): {trending_topics}
Past video types that performed well (may be empty): {past_video_types}

Return a JSON object with this EXACT schema:
{"video_ideas": ["idea one", "idea two"]}"#;

/// System prompt for thumbnail ideas.
pub const THUMBNAIL_IDEAS_SYSTEM: &str = "You are an expert in creating engaging YouTube \
    thumbnails. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Thumbnail ideas prompt. Replace `{topic}`.
pub const THUMBNAIL_IDEAS_PROMPT_TEMPLATE: &str = r#"Generate a list of thumbnail ideas for the following topic. For each idea, suggest bold thumbnail text, colors, and emotion ideas.

Topic: {topic}

Return a JSON object with this EXACT schema:
{"ideas": ["idea one", "idea two"]}"#;

/// System prompt for the content strategist flow.
pub const CONTENT_STRATEGY_SYSTEM: &str = "You are an expert Content Strategist and Social \
    Media Manager for a top-tier digital agency. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Content strategy prompt. Replace `{topic}`, `{goal}`.
pub const CONTENT_STRATEGY_PROMPT_TEMPLATE: &str = r#"A client has come to you with the following information:
- Niche/Topic: {topic}
- Primary Goal: {goal}

Produce a complete content strategy: a target audience persona, 3-5 content pillars, tailored strategies for YouTube, Instagram, TikTok and X, a sample one-week posting schedule, and 5-7 concrete content ideas.

Return a JSON object with this EXACT schema:
{
  "audience_persona": {
    "name": "Fictional name",
    "demographics": "Age, gender, location, occupation",
    "pain_points": ["problem one"],
    "goals": ["goal one"]
  },
  "content_pillars": ["pillar one"],
  "platform_strategies": [
    {
      "platform": "YouTube",
      "content_format": "In-depth tutorials, product reviews",
      "posting_frequency": "2 videos per week",
      "strategic_advice": "advice"
    }
  ],
  "weekly_schedule": [
    {"day": "Monday", "platform": "Instagram", "idea": "a concrete idea"}
  ],
  "specific_ideas": ["idea one"]
}"#;

/// System prompt for trending reel discovery.
pub const TRENDING_REELS_SYSTEM: &str = "You are an expert social media strategist who is \
    an expert at identifying trending audio and content on Instagram Reels. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Trending reels prompt. Replace `{topic}`.
pub const TRENDING_REELS_PROMPT_TEMPLATE: &str = r#"Based on the provided topic, identify 3-5 current trending Reels or audio formats.

For each trend provide:
1. A title for the trend (e.g., the name of the song, the meme format).
2. A brief reason why it's currently popular or how it's being used.
3. A specific, actionable content idea applying this trend to the topic.
4. A popularity rating: "Very Hot", "Gaining Momentum", or "Niche-Specific".
5. A suggested call to action for the content idea.

Topic: {topic}

Return a JSON object with this EXACT schema:
{
  "trends": [
    {
      "title": "trend name",
      "reason": "why it is trending",
      "content_suggestion": "a concrete idea",
      "popularity": "Very Hot",
      "suggested_cta": "a call to action"
    }
  ]
}"#;
