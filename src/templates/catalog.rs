//! Literal post template variants, bucketed by kind and category.
//!
//! Placeholders in `{braces}` or `[brackets]` are left for the operator to
//! fill in; nothing here is rendered with a template engine.

use crate::domain::{Category, TemplateKind};

/// One literal template: a suggested post title and body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateVariant {
    pub title: &'static str,
    pub body: &'static str,
}

const fn variant(title: &'static str, body: &'static str) -> TemplateVariant {
    TemplateVariant { title, body }
}

pub const GENERIC_LAUNCH: &[TemplateVariant] = &[
    variant(
        "I built {catchy_project_description}",
        "{product_media}\n\nHere\u{2019}s how it works:\n\n{core_concept_1}\n\n{core_concept_2}\n\n{core_concept_3}\n\nBasically, {one_line_summary}.\n\nWould you like to try it out?\n\n{call_to_action}",
    ),
    variant(
        "Made a {short_project_description}",
        "{product_demo_video}\n\nCheck out a quick demo above \u{2014} would love to hear feedback.",
    ),
    variant(
        "Wanted something better than {competitor}, made it myself in {time_frame}",
        "{demo_video}\n\nI was frustrated with {competitor} because {reason}. So I built {project_name} to solve that by {unique_approach}.",
    ),
];

pub const SAAS_LAUNCH: &[TemplateVariant] = &[
    variant(
        "I got fed up with {problem in your niche}, so I built my own.",
        "{product_media}\n\nHey Reddit,\n\nMost {category} tools fall into two buckets:\n\u{2013} {Weakness 1}\n\u{2013} {Weakness 2}\n\nNone of them actually {core emotional frustration or goal they fail at}.\n\nSo I built my own. It\u{2019}s called {Product Name} \u{2014} a {one-line description with clear differentiator}.\n\nHere\u{2019}s what it does:\n\u{2013} {Core function 1}\n\u{2013} {Core function 2}\n\u{2013} {Core function 3}\n\u{2013} {Unique selling point}\n\u{2013} {Tech/UX highlight}\n\nIt\u{2019}s live now on {platforms}, free to try: {link}\n\nWould love your honest feedback:\n\u{2013} What frustrates you about current {product category}?\n\u{2013} What features do you wish existed?\n\nHappy to answer questions or go deeper in the comments.",
    ),
    variant(
        "Turn {input or idea} into {output or result}",
        "\nHey Reddit,\n\nI\u{2019}ve been experimenting with {tech/idea in one line}. Right now, I\u{2019}ve built {brief description of current prototype or tool} \u{2014} {product link}.\n\nIt takes {what the tool accepts} and turns it into {what it produces}. It\u{2019}s still rough, but you can {mention what users can try or download}.\n\nLong-term goal: {describe bigger vision briefly}.\n\nIf you\u{2019}re into {related fields}, I\u{2019}d love to connect or collaborate.",
    ),
    variant(
        "I made an app where you {fun or emotional core action / experience}",
        "\nHey Reddit,\n\nI\u{2019}ve always been {personal hook}. Fast forward to today \u{2014} I decided to build {product name or concept}, a {short one-line description of what it is and what it does}.\n\nHere\u{2019}s what it does:\n\u{2013} {Core feature 1}\n\u{2013} {Core feature 2}\n\u{2013} {Core feature 3}\n\nRight now you can [describe free tier or how to try it easily].\n\nWould love for you to give it a try and tell me what you think: {App or website link}",
    ),
];

pub const EDUCATION_LAUNCH: &[TemplateVariant] = &[
    variant(
        "Study Tools for [Action - ex Creting Flashcard ]",
        "Hey! I\u{2019}m looking for the best AI tools to help record and summarize lectures, then turn them into flashcards or quizzes. I\u{2019}ve seen a bunch of ads for apps like Coconote, TurboAI, and [Your Tool], but I\u{2019}m not sure which one actually works best \u{2014} or if there\u{2019}s something better out there. I\u{2019}m starting my freshman year of college soon, so I\u{2019}d really appreciate any recommendations. Thanks!",
    ),
    variant(
        "Increased my grades by X% with a simple habbit change",
        "One simple habit that\u{2019}s made a huge difference in my study sessions is focusing on removing friction by [effect/action] using [your tool]. I\u{2019}ve realized that the best way to stay consistent and focused is to make it harder to get distracted and easier to stay on task. It doesn\u{2019}t really matter what method you use the key is finding small tweaks that help you maintain momentum when studying.",
    ),
];

pub const SKINCARE_LAUNCH: &[TemplateVariant] = &[
    variant(
        "[Routine Help] I stopped chasing trends and built a boring routine",
        "[Relevant Image for your product]\n\nHey Reddit,\n\nI used to try all sorts of trendy products to fix {specific problem}, but after months of learning I focused on fundamentals: gentle cleansing, a solid moisturizer, and a couple of reliable actives. I\u{2019}ve been consistent for {time period} and my skin has improved \u{2014} fewer breakouts, calmer texture.\n\nAM Routine:\n[Cleanser / product 1] \u{2014} [reason]\n[Serum / product 2] \u{2014} [benefits]\n[Moisturizer / product 3] \u{2014} [texture/comment]\n\nPM Routine:\n[Cleanser / product 1] \u{2014} [why]\n[Serum / product 2] \u{2014} [active]\n[Moisturizer / product 3] \u{2014} [note]\n\nMain takeaway: simple, consistent care works. Do you agree / am I on the right path?",
    ),
    variant(
        "How can I get rid of [specific skin issue / location]?",
        "[Image related to title and your product]\n\nI\u{2019}ve noticed {describe issue} on my {location} for {time period}. My skin type: {dry/oily/combination/sensitive}. Current routine: {brief routine}. Any tips for treatment or prevention? I\u{2019}ll post pics soon.",
    ),
];

pub const GENERIC_MILESTONE: &[TemplateVariant] = &[
    variant(
        "X months of building \u{2014} what nobody tells you",
        "I've been building {project_name}...",
    ),
    variant("My app made $[REVENUE] \u{2014} how", "I\u{2019}ve been building {product_category}..."),
    variant("Side project crossed $[MRR] MRR", "I can\u{2019}t believe it, but my side project..."),
];

pub const SAAS_MILESTONE: &[TemplateVariant] = &[
    variant(
        "[X months/years] of [your project/phase] and here\u{2019}s what nobody tells you",
        "Been {brief context \u{2014} what you\u{2019}ve been doing, how you started, what tools you used}. Everyone talks about {the easy or hyped-up part}, but nobody talks about {the painful or hidden truth}.\n\n{Main lesson 1 \u{2014} the \u{201c}60% truth\u{201d} part}\nYou can {describe what\u{2019}s possible or easy at first}. But then {what breaks or goes wrong when it gets real}. AI / tools / templates help a lot early, but they fail in the messy middle.\n\n{Example problem 1 \u{2014} describe one real technical or business issue}\nWhat went wrong, what you thought, what the reality was, what you learned.\n\n{Example problem 2 \u{2014} another one with brief story and learning}\nWhat failed, how AI or shortcuts didn\u{2019}t help, and the real fix or understanding you gained.\n\n{Example problem 3 \u{2014} short one-line insight about a recurring pain point or theme}\n\n{Turning point paragraph}\nThe shift came when I stopped {bad habit / mindset} and started {new approach / skill / discipline}.\nStarted {describe what you actually learned or started doing differently}.\n\n{Lesson / reflection paragraph}\nYou don\u{2019}t need to become {expert role}, but you do need to understand {fundamentals you ignored before}. That\u{2019}s what separates {people who burn out} from {those who build something stable}.\n\n{Closing thought}\nMost success stories skip this part. The real game is learning enough of the fundamentals so your tools don\u{2019}t destroy you \u{2014} then using them to move 10x faster where you actually know what\u{2019}s going on.\n\n{Optional final line \u{2014} what you\u{2019}re doing now / takeaway}\nStill using {tool/process} every day, just with better judgment and a bit more humility.",
    ),
    variant(
        "It\u{2019}s finally happening \u{2014} my SaaS just hit [$X] in [timeframe]!",
        "\n[Revenue Screenshot Image]\nJust {X weeks/months} ago, I started building {brief description of your product \u{2014} what it does and who it\u{2019}s for}. It began as a small idea to {problem you were solving or gap you noticed}.\n\n{Insert your website or product link}\n\nWhat started as a quick experiment has grown faster than I expected \u{2014} {X users, reviews, traction stats, etc.}. All organic, no paid ads.",
    ),
];

pub const EDUCATION_MILESTONE: &[TemplateVariant] = &[
    variant(
        "Day [X] of [activity/habit] on the way to [goal]",
        "[Image clearly showcasing your product]\n\nDay [X] wasn\u{2019}t easy at all \u{2014} it takes a lot of discipline, especially on [challenging time periods, e.g., weekends, nights, mornings].\n\nBut honestly, [reflective insight \u{2014} e.g., certain times can actually be easier than expected]. For example, [explain why, with a small tip or strategy].\n\nHow do you handle [relevant challenge for the audience]? Would love to hear your thoughts/tips!",
    ),
    variant(
        "Your brain is literally rewiring itself when you struggle to learn something new (tips from a [your background, e.g., top student / subject expert])",
        "Here\u{2019}s what most people don\u{2019}t realize: the [foggy/uncomfortable/difficult] feeling when you can\u{2019}t recall something? It\u{2019}s not failure. It\u{2019}s your brain forming new connections. This is the core principle behind [active recall / learning method].\n\nBut without reinforcement, these connections fade quickly \u{2014} this is [reference to forgetting curve or concept]. The fix is [spaced repetition / deliberate practice / self-testing]. Each [quiz / flashcard / review session], timed right before you\u{2019}d forget, strengthens memory and builds mental resilience.\n\nThink of it like [analogy \u{2014} lifting weights / building a muscle / practicing an instrument]. The struggle means growth, and [spacing / repetition / consistent practice] locks it in. You can use tools like [software/tool] to handle the timing and practice for you.\n\nWhether it\u{2019}s [subject 1, subject 2, subject 3], breakthroughs come from struggle, review, and testing. Don\u{2019}t quit during the hard part. Each [quiz / exercise / practice session] is an investment in a sharper, more durable mind.\n\nYour future self is counting on you to push through today\u{2019}s discomfort. Every moment of mental strain is an investment into a sharper, more resilient brain.\n\nHappy studying :)",
    ),
];

pub const SKINCARE_MILESTONE: &[TemplateVariant] = &[
    variant(
        "My skin now \u{2014} X years of [skincare method] vs before",
        "[3-4 Images - Before/After/Product Related Images]\n\nDefinitely not perfect, but as someone who struggled with {concerns}, the improvement is clear. Thinking of adding {ingredient} for scarring/hyperpigmentation \u{2014} any recs? Skin type: {type}.",
    ),
    variant(
        "Empties \u{2014} [Season]: [Brand1], [Brand2], [Brand3]",
        "[Multiple images]\n\nSkin type: {type}. Notes: {short notes on likes/dislikes and repurchase intent}.",
    ),
];

pub const GENERIC_AMA: &[TemplateVariant] = &[
    variant(
        "[Achievement] \u{2014} here\u{2019}s how it happened",
        "Hey {community_name} \u{1f44b}\n\nI wanted to share the journey...",
    ),
    variant(
        "My [PROJECT] made $[REVENUE] \u{2014} AMA",
        "Hi {community_name},\n\nMy {project_name} just passed...",
    ),
    variant(
        "[PROJECT] helped [#] \u{2014} AMA",
        "Hello {community_name},\n\nI\u{2019}m {founder_name}, founder of {project_name}...",
    ),
];

pub const EDUCATION_AMA: &[TemplateVariant] = &[variant(
    "What\u{2019}s the one study habit that actually changed your grades?",
    "Okay, real talk \u{2014} what\u{2019}s the specific study habit that actually moved your grades up? Not the generic \u{201c}take notes\u{201d} advice, but something concrete that genuinely worked for you.\n\nAlso curious \u{2014} are [AI study tools / apps / flashcard software] actually helping anyone else, or are they just another source of distraction?",
)];

/// Content-only kinds have a single untitled body each
pub const GENERIC_VALUE: &[TemplateVariant] = &[variant(
    "",
    "Here\u{2019}s one helpful tip we use in {project_name}: {practical_tip}\n\nWhy it matters: {why_it_matters}",
)];

pub const GENERIC_JOURNEY: &[TemplateVariant] = &[variant(
    "",
    "The story of how {project_name} came to be:\n\n{origin_story_paragraph}",
)];

pub const GENERIC_RESOURCE: &[TemplateVariant] = &[variant(
    "",
    "Found a resource that helped us build {project_name}: {resource_title} \u{2014} {resource_link}",
)];

/// Category-specific bucket; empty when the category has none for this kind
pub fn category_variants(kind: TemplateKind, category: Category) -> &'static [TemplateVariant] {
    match (kind, category) {
        (TemplateKind::Launch, Category::Saas) => SAAS_LAUNCH,
        (TemplateKind::Launch, Category::Education) => EDUCATION_LAUNCH,
        (TemplateKind::Launch, Category::Skincare) => SKINCARE_LAUNCH,
        (TemplateKind::Milestone, Category::Saas) => SAAS_MILESTONE,
        (TemplateKind::Milestone, Category::Education) => EDUCATION_MILESTONE,
        (TemplateKind::Milestone, Category::Skincare) => SKINCARE_MILESTONE,
        (TemplateKind::Ama, Category::Education) => EDUCATION_AMA,
        _ => &[],
    }
}

/// Generic bucket used when no category-specific variant applies
pub fn generic_variants(kind: TemplateKind) -> &'static [TemplateVariant] {
    match kind {
        TemplateKind::Launch => GENERIC_LAUNCH,
        TemplateKind::Milestone => GENERIC_MILESTONE,
        TemplateKind::Ama => GENERIC_AMA,
        TemplateKind::Value => GENERIC_VALUE,
        TemplateKind::Journey => GENERIC_JOURNEY,
        TemplateKind::Resource => GENERIC_RESOURCE,
    }
}
