//! Static catalog data.
//!
//! One record per cataloged pattern, grouped by category, in display
//! order. Keep slugs stable: they are routing keys and appear in saved
//! links. Widget ids usually match the slug; an id with no registered
//! demo renders the placeholder until the demo lands.

use super::{Category, VisualEntry};

fn entry(
    name: &'static str,
    slug: &'static str,
    category: Category,
    description: &'static str,
    alt_names: &'static [&'static str],
    tags: &'static [&'static str],
) -> VisualEntry {
    VisualEntry {
        name,
        slug,
        category,
        description,
        alt_names,
        tags,
        widget: slug,
    }
}

pub(super) fn build_entries() -> Vec<VisualEntry> {
    use Category::*;
    vec![
        // ------------------------------------------------------------------
        // Navigation
        // ------------------------------------------------------------------
        entry(
            "Hamburger Menu",
            "hamburger-menu",
            Navigation,
            "Three stacked bars that expand into the site's primary navigation, usually on small screens.",
            &["menu icon", "sandwich menu"],
            &["navigation", "mobile", "icon", "collapse"],
        ),
        entry(
            "Breadcrumbs",
            "breadcrumbs",
            Navigation,
            "A horizontal trail of links showing the path from the home page to the current page.",
            &["breadcrumb trail"],
            &["navigation", "hierarchy", "links"],
        ),
        entry(
            "Tabs",
            "tabs",
            Navigation,
            "A row of labeled triggers that swap the visible panel without leaving the page.",
            &["tab bar"],
            &["navigation", "panels", "switcher"],
        ),
        entry(
            "Pagination",
            "pagination",
            Navigation,
            "Numbered page controls with previous and next arrows for long result sets.",
            &["pager"],
            &["navigation", "pages", "lists"],
        ),
        entry(
            "Bottom Navigation",
            "bottom-navigation",
            Navigation,
            "A fixed bar of three to five icon destinations along the bottom edge of a mobile app.",
            &["tab bar (iOS)"],
            &["navigation", "mobile", "icon", "fixed"],
        ),
        entry(
            "Navbar",
            "navbar",
            Navigation,
            "The horizontal header strip holding the logo, primary links, and account actions.",
            &["header bar", "app bar"],
            &["navigation", "header", "links"],
        ),
        entry(
            "Stepper",
            "stepper",
            Navigation,
            "A numbered sequence of steps showing progress through a multi-stage flow like checkout.",
            &["wizard", "progress steps"],
            &["navigation", "progress", "forms"],
        ),
        entry(
            "Mega Menu",
            "mega-menu",
            Navigation,
            "A full-width dropdown panel exposing an entire section of the site map in columns.",
            &[],
            &["navigation", "dropdown", "links", "desktop"],
        ),
        entry(
            "Back To Top",
            "back-to-top",
            Navigation,
            "A floating button that appears after scrolling and returns the viewport to the page top.",
            &["scroll to top"],
            &["navigation", "scroll", "button"],
        ),
        // ------------------------------------------------------------------
        // Input
        // ------------------------------------------------------------------
        entry(
            "Button",
            "button",
            Input,
            "The basic clickable control that triggers an action, in filled, outline, and ghost styles.",
            &["push button", "cta"],
            &["input", "action", "click"],
        ),
        entry(
            "Toggle Switch",
            "toggle-switch",
            Input,
            "A sliding on/off control, the physical-switch metaphor for a boolean setting.",
            &["switch"],
            &["input", "boolean", "settings"],
        ),
        entry(
            "Slider",
            "slider",
            Input,
            "A draggable thumb along a track for picking a numeric value within a range.",
            &["range input", "trackbar"],
            &["input", "range", "numeric", "drag"],
        ),
        entry(
            "Checkbox",
            "checkbox",
            Input,
            "A small square that toggles a single option on or off, with an indeterminate third state.",
            &["tick box"],
            &["input", "boolean", "forms"],
        ),
        entry(
            "Radio Group",
            "radio-group",
            Input,
            "A set of mutually exclusive round options where selecting one deselects the rest.",
            &["radio buttons", "option buttons"],
            &["input", "choice", "forms"],
        ),
        entry(
            "Dropdown Select",
            "dropdown-select",
            Input,
            "A collapsed control that opens a list of options and shows the chosen one when closed.",
            &["select", "combo box", "picker"],
            &["input", "choice", "dropdown", "forms"],
        ),
        entry(
            "Autocomplete",
            "autocomplete",
            Input,
            "A text field that suggests matching completions in a panel as the user types.",
            &["typeahead", "combobox"],
            &["input", "search", "suggestions", "text"],
        ),
        entry(
            "Date Picker",
            "date-picker",
            Input,
            "A calendar popover for choosing a date, often with a range mode for two endpoints.",
            &["calendar input"],
            &["input", "date", "calendar", "popover"],
        ),
        entry(
            "Rating",
            "rating",
            Input,
            "A row of stars or icons the user clicks to score something from one to five.",
            &["star rating"],
            &["input", "stars", "score"],
        ),
        entry(
            "Tag Input",
            "tag-input",
            Input,
            "A field that turns typed phrases into removable pills, collecting a list of labels.",
            &["chips input", "token field"],
            &["input", "tags", "pills", "text"],
        ),
        entry(
            "Search Bar",
            "search-bar",
            Input,
            "A text field with a magnifier icon, usually clearing and submitting inline.",
            &["search box", "search field"],
            &["input", "search", "text", "icon"],
        ),
        entry(
            "Segmented Control",
            "segmented-control",
            Input,
            "A connected row of two to five buttons acting as an exclusive choice, iOS style.",
            &["button group"],
            &["input", "choice", "switcher", "mobile"],
        ),
        // ------------------------------------------------------------------
        // Feedback
        // ------------------------------------------------------------------
        entry(
            "Toast",
            "toast",
            Feedback,
            "A small transient notification that slides in at a screen edge and dismisses itself.",
            &["snackbar"],
            &["feedback", "notification", "transient"],
        ),
        entry(
            "Modal",
            "modal",
            Feedback,
            "A dialog layered over a dimmed backdrop that blocks the page until dismissed.",
            &["dialog", "overlay"],
            &["feedback", "dialog", "overlay", "focus"],
        ),
        entry(
            "Tooltip",
            "tooltip",
            Feedback,
            "A small label that appears near a control on hover or focus to explain it.",
            &["hint", "infotip"],
            &["feedback", "hover", "label", "help"],
        ),
        entry(
            "Progress Bar",
            "progress-bar",
            Feedback,
            "A horizontal track that fills to show how much of an operation has completed.",
            &["loading bar"],
            &["feedback", "loading", "progress"],
        ),
        entry(
            "Spinner",
            "spinner",
            Feedback,
            "A rotating indicator for indeterminate waits where no percentage is known.",
            &["loader", "activity indicator"],
            &["feedback", "loading", "indeterminate"],
        ),
        entry(
            "Skeleton",
            "skeleton",
            Feedback,
            "Gray placeholder blocks in the shape of the incoming content, often shimmering.",
            &["skeleton screen", "ghost loader"],
            &["feedback", "loading", "placeholder", "shimmer"],
        ),
        entry(
            "Badge",
            "badge",
            Feedback,
            "A tiny count or status dot pinned to an icon's corner, like an unread counter.",
            &["notification dot", "pill"],
            &["feedback", "count", "status", "icon"],
        ),
        entry(
            "Banner Alert",
            "banner-alert",
            Feedback,
            "A full-width colored strip for page-level messages: info, success, warning, error.",
            &["alert", "callout"],
            &["feedback", "message", "status"],
        ),
        entry(
            "Empty State",
            "empty-state",
            Feedback,
            "The friendly illustration-and-hint view shown when a list or search has no results.",
            &["zero state", "blank slate"],
            &["feedback", "placeholder", "onboarding"],
        ),
        // ------------------------------------------------------------------
        // Content
        // ------------------------------------------------------------------
        entry(
            "Card",
            "card",
            Content,
            "A bordered or elevated surface grouping an image, title, text, and actions as one unit.",
            &["tile"],
            &["content", "surface", "grouping"],
        ),
        entry(
            "Avatar",
            "avatar",
            Content,
            "A round user image or initials, stacked into overlapping groups for participants.",
            &["profile picture", "userpic"],
            &["content", "user", "image", "identity"],
        ),
        entry(
            "Accordion",
            "accordion",
            Content,
            "Vertically stacked headers that expand one section of content at a time.",
            &["collapse", "expansion panel", "disclosure"],
            &["content", "collapse", "faq", "sections"],
        ),
        entry(
            "Carousel",
            "carousel",
            Content,
            "A horizontal strip of slides with arrows and dot indicators, advancing one at a time.",
            &["slider (images)", "slideshow", "gallery"],
            &["content", "slides", "images", "dots"],
        ),
        entry(
            "Masonry Grid",
            "masonry-grid",
            Content,
            "A multi-column layout packing variable-height items without row gaps, Pinterest style.",
            &["pinterest layout"],
            &["content", "grid", "layout", "images"],
        ),
        entry(
            "Timeline",
            "timeline",
            Content,
            "Events along a vertical line with dots and dates, newest first or oldest first.",
            &["activity feed"],
            &["content", "events", "history", "chronological"],
        ),
        entry(
            "Hero Section",
            "hero-section",
            Content,
            "The oversized banner at the top of a landing page: headline, subtext, and call to action.",
            &["jumbotron", "banner"],
            &["content", "landing", "header", "marketing"],
        ),
        entry(
            "Lightbox",
            "lightbox",
            Content,
            "A fullscreen overlay presenting an image or video enlarged over a darkened page.",
            &["image overlay"],
            &["content", "images", "overlay", "zoom"],
        ),
        // ------------------------------------------------------------------
        // Animation
        // ------------------------------------------------------------------
        entry(
            "Marquee",
            "marquee",
            Animation,
            "Content scrolling continuously sideways across its container, looping seamlessly.",
            &["ticker", "scrolling text"],
            &["animation", "scroll", "loop", "text"],
        ),
        entry(
            "Parallax Scroll",
            "parallax-scroll",
            Animation,
            "Background layers moving slower than the foreground while scrolling, creating depth.",
            &[],
            &["animation", "scroll", "depth", "background"],
        ),
        entry(
            "Typewriter",
            "typewriter",
            Animation,
            "Text revealed one character at a time with a blinking caret, as if being typed.",
            &["typing effect"],
            &["animation", "text", "reveal"],
        ),
        entry(
            "Pulse",
            "pulse",
            Animation,
            "An element rhythmically scaling or glowing to draw attention, like a live indicator.",
            &["heartbeat"],
            &["animation", "attention", "loop"],
        ),
        entry(
            "Ripple",
            "ripple",
            Animation,
            "A circular wave expanding from the press point inside a control, Material style.",
            &["ink ripple"],
            &["animation", "click", "material", "touch"],
        ),
        entry(
            "Fade Transition",
            "fade-transition",
            Animation,
            "Content cross-fading in and out during view changes instead of cutting instantly.",
            &["crossfade"],
            &["animation", "transition", "opacity"],
        ),
        entry(
            "Confetti",
            "confetti",
            Animation,
            "Colored particles bursting and falling across the screen to celebrate a success.",
            &["celebration effect"],
            &["animation", "celebration", "particles"],
        ),
        // ------------------------------------------------------------------
        // Container
        // ------------------------------------------------------------------
        entry(
            "Bottom Sheet",
            "bottom-sheet",
            Container,
            "A panel sliding up from the bottom edge, draggable between peek and full heights.",
            &["sheet"],
            &["container", "mobile", "overlay", "drag"],
        ),
        entry(
            "Drawer",
            "drawer",
            Container,
            "A panel sliding in from a side edge over or beside the content, holding navigation or tools.",
            &["side panel", "off-canvas"],
            &["container", "overlay", "navigation", "slide"],
        ),
        entry(
            "Popover",
            "popover",
            Container,
            "A floating panel anchored to a trigger, flipping sides to stay inside the viewport.",
            &["flyout"],
            &["container", "overlay", "anchor", "floating"],
        ),
        entry(
            "Split View",
            "split-view",
            Container,
            "Two resizable panes separated by a draggable divider, master-detail style.",
            &["split pane", "resizable panels"],
            &["container", "layout", "resize", "panes"],
        ),
        entry(
            "Collapsible Panel",
            "collapsible-panel",
            Container,
            "A titled region that folds down to its header to reclaim space.",
            &["collapse panel"],
            &["container", "collapse", "layout"],
        ),
        entry(
            "Sticky Header",
            "sticky-header",
            Container,
            "A header that stays pinned to the top of the viewport while content scrolls beneath it.",
            &["fixed header", "pinned header"],
            &["container", "scroll", "header", "fixed"],
        ),
        // ------------------------------------------------------------------
        // Data
        // ------------------------------------------------------------------
        entry(
            "Table",
            "table",
            Data,
            "Rows and columns with a header, zebra striping, and sortable column affordances.",
            &["data grid"],
            &["data", "rows", "columns", "sort"],
        ),
        entry(
            "Stat Card",
            "stat-card",
            Data,
            "A compact tile showing one key metric with a label and a delta against last period.",
            &["kpi card", "metric card"],
            &["data", "metric", "dashboard", "card"],
        ),
        entry(
            "Progress Ring",
            "progress-ring",
            Data,
            "A circular gauge whose arc length encodes a percentage, with the value in the center.",
            &["radial progress", "donut gauge"],
            &["data", "progress", "circular", "percentage"],
        ),
        entry(
            "Bar Chart",
            "bar-chart",
            Data,
            "Categorical values encoded as the heights of vertical bars on a shared axis.",
            &["column chart"],
            &["data", "chart", "comparison"],
        ),
        entry(
            "Sparkline",
            "sparkline",
            Data,
            "A tiny inline line chart without axes, showing a trend next to a number.",
            &[],
            &["data", "chart", "trend", "inline"],
        ),
        entry(
            "Tree View",
            "tree-view",
            Data,
            "A nested outline of expandable nodes with indentation and disclosure arrows.",
            &["file tree", "outline view"],
            &["data", "hierarchy", "nested", "expand"],
        ),
        entry(
            "Kanban Board",
            "kanban-board",
            Data,
            "Columns of cards representing workflow stages, with cards dragged between columns.",
            &["board view"],
            &["data", "board", "workflow", "cards"],
        ),
    ]
}
