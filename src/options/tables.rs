use crate::options::registry::{
    keys, ConfigOption, ConfigPreset, Dimension, OptionTable, PresetSelection,
};

pub const DEFAULT_ART_STYLE: &str = "traditional-gongbi";
pub const DEFAULT_LAYOUT: &str = "horizontal";
pub const DEFAULT_COLOR_SCHEME: &str = "classic-red-gold";
pub const DEFAULT_DECORATION: &str = "rich-ornate";
pub const DEFAULT_BACKGROUND: &str = "texture-paper";
pub const DEFAULT_ZODIAC: &str = "🐎 马年";
pub const DEFAULT_STYLE: &str = "传统典雅";
pub const DEFAULT_THEME: &str = "万事如意";
pub const DEFAULT_TONE: &str = "活泼";

#[allow(clippy::too_many_arguments)]
fn art_style(
    value: &str,
    label: &str,
    description: &str,
    tags: &str,
    technique: &str,
    style: &str,
    quality: &str,
    visual_features: &str,
    examples: &str,
    negative: &str,
) -> ConfigOption {
    ConfigOption::new(value, label, description)
        .with(keys::TAGS, tags)
        .with(keys::TECHNIQUE, technique)
        .with(keys::STYLE, style)
        .with(keys::QUALITY, quality)
        .with(keys::VISUAL_FEATURES, visual_features)
        .with(keys::EXAMPLES, examples)
        .with(keys::NEGATIVE, negative)
}

pub fn art_styles() -> OptionTable {
    let entries = vec![
        art_style(
            "traditional-ink",
            "传统水墨",
            "中国传统水墨画风格，意境深远，墨韵生动",
            "传统,水墨,意境,古典",
            "中国传统水墨画技法，使用毛笔蘸墨，通过墨色浓淡干湿变化营造意境",
            "水墨画风格 (Chinese Ink Wash Painting Style)，黑白灰为主调，讲究留白和意境",
            "水墨晕染效果，墨色层次分明，有明显的笔触和墨迹流动感",
            "黑色墨迹、水墨晕染、飞白效果、浓淡干湿变化、笔触可见、宣纸质感、水渍痕迹",
            "参考齐白石、吴冠中的水墨风格，画面以黑白灰为主，局部可加淡雅色彩点缀",
            "彩色照片，油画质感，3D效果，过于鲜艳的色彩，工笔画线条，卡通造型",
        ),
        art_style(
            "traditional-gongbi",
            "工笔画",
            "精细工笔画风格，线条工整，色彩丰富",
            "传统,工笔,精细,华丽",
            "工笔画精细技法，用细腻的笔触勾勒线条，层层渲染设色",
            "工笔画风格 (Chinese Gongbi Painting Style)，线条精致，色彩鲜艳，装饰性强",
            "工笔细腻笔触，轮廓线条清晰工整，色彩饱满浓郁，细节精细入微",
            "精细线描、均匀平涂、色彩浓郁、金色勾边、装饰纹样、对称构图、富丽堂皇",
            "参考故宫年画、敦煌壁画风格，颜色鲜艳，装饰华美，线条工整",
            "水墨晕染，模糊笔触，素描效果，现代插画，卡通风格，3D渲染",
        ),
        art_style(
            "modern-illustration",
            "现代插画",
            "现代插画风格，色彩明快，构图新颖",
            "现代,插画,时尚,创意",
            "现代数字插画技法，使用扁平化设计和矢量图形",
            "现代插画风格 (Modern Illustration Style)，色彩明快，构图简洁，设计感强",
            "插画质感，色块分明，渐变柔和，视觉冲击力强",
            "扁平化色块、简洁线条、几何图形、渐变色彩、现代构图、明亮色调、设计感强",
            "参考现代海报设计风格，色彩鲜明，构图新颖，具有时尚感",
            "传统水墨，工笔细描，写实照片，古旧质感，过于复杂的细节",
        ),
        art_style(
            "cartoon-style",
            "卡通风格",
            "可爱卡通风格，生动有趣，老少皆宜",
            "卡通,可爱,趣味,活泼",
            "卡通漫画技法，造型夸张可爱，色彩明亮活泼",
            "卡通风格 (Cartoon Style)，Q版造型，圆润线条，童趣盎然",
            "卡通渲染效果，轮廓线明显，色彩鲜艳，造型可爱夸张",
            "Q版造型、大眼睛、圆润轮廓、夸张表情、明亮色彩、简化细节、可爱元素",
            "参考迪士尼、皮克斯动画风格，造型可爱，色彩鲜艳，充满童趣",
            "写实风格，严肃画风，复杂细节，水墨晕染，工笔线描",
        ),
        art_style(
            "paper-cut",
            "剪纸艺术",
            "传统剪纸艺术风格，层次分明，寓意吉祥",
            "剪纸,民俗,吉祥,传统",
            "剪纸艺术技法，通过剪刻镂空形成图案，层叠产生立体感",
            "剪纸艺术风格 (Paper-Cut Art Style)，镂空图案，对称构图，民俗特色",
            "剪纸效果，轮廓锐利清晰，层次叠加，阴影明显，纸质肌理",
            "镂空轮廓、对称图案、层叠效果、锯齿边缘、纸张质感、阴影投射、民俗纹样",
            "参考中国传统窗花、陕西剪纸风格，红纸镂空，层次丰富，民俗味浓",
            "模糊边缘，渐变效果，写实质感，3D立体，水墨晕染",
        ),
        art_style(
            "calligraphy",
            "书法艺术",
            "书法艺术风格，笔墨飞扬，文化底蕴深厚",
            "书法,文化,艺术,典雅",
            "书法艺术技法，毛笔书写，笔画遒劲有力，墨色饱满",
            "书法艺术风格 (Calligraphy Art Style)，以书法为主要视觉元素，文化气息浓厚",
            "书法质感，笔画粗细有致，墨色浓淡变化，飞白效果，笔力遒劲",
            "毛笔笔触、飞白效果、墨色变化、笔画顿挫、行云流水、书法结构、印章点缀",
            "参考王羲之、颜真卿书法风格，笔力遒劲，墨韵飞扬，文化底蕴深厚",
            "卡通字体，印刷体，电脑字体，彩色装饰，过多图案",
        ),
        art_style(
            "3d-render",
            "3D渲染",
            "现代3D渲染风格，立体感强，视觉冲击力强",
            "3D,现代,立体,科技",
            "3D建模渲染技术，使用计算机图形学创造立体效果",
            "3D渲染风格 (3D Render Style)，立体造型，光影逼真，材质细腻",
            "3D渲染质感，光照真实，反射高光，景深效果，材质逼真",
            "立体造型、真实光影、材质反射、景深虚化、体积感、高光反射、环境光遮蔽",
            "参考皮克斯3D动画风格，立体感强，光影真实，材质细腻，视觉震撼",
            "平面效果，手绘质感，水墨风格，剪纸风格，模糊质感",
        ),
        art_style(
            "minimalist",
            "极简风格",
            "极简主义风格，简约而不简单，突出核心元素",
            "极简,简约,现代,纯净",
            "极简主义设计技法，删繁就简，突出核心要素",
            "极简风格 (Minimalist Style)，留白艺术，简约线条，重点突出",
            "极简质感，画面简洁，色彩纯净，构图平衡，留白充足",
            "大面积留白、简洁线条、纯色色块、几何形状、对比强烈、焦点突出、负空间",
            "参考无印良品MUJI设计风格，简约而不简单，留白得当，重点突出",
            "繁复装饰，过多细节，复杂纹样，华丽元素，杂乱构图",
        ),
    ];
    OptionTable::with_default(Dimension::ArtStyle, entries, DEFAULT_ART_STYLE)
}

#[allow(clippy::too_many_arguments)]
fn layout(
    value: &str,
    label: &str,
    description: &str,
    aspect_ratio: &str,
    (width, height): (u32, u32),
    composition: &str,
    ratio: &str,
    arrangement: &str,
) -> ConfigOption {
    ConfigOption::new(value, label, description)
        .with(keys::ASPECT_RATIO, aspect_ratio)
        .with(keys::WIDTH, width.to_string())
        .with(keys::HEIGHT, height.to_string())
        .with(keys::COMPOSITION, composition)
        .with(keys::RATIO, ratio)
        .with(keys::ARRANGEMENT, arrangement)
}

pub fn layouts() -> OptionTable {
    let entries = vec![
        layout(
            "horizontal",
            "横版布局",
            "16:9横版布局，适合横屏显示和社交分享",
            "16:9",
            (1664, 936),
            "横版构图，适合宽屏展示",
            "16:9宽屏比例",
            "春联采用传统竖向书写方式，从上往下排列。右侧为上联，左侧为下联，顶部中央为横批。文字必须竖向排列（每个字独立一行，从上到下），左右完全对称",
        ),
        layout(
            "vertical",
            "竖版布局",
            "9:16竖版布局，适合手机壁纸和竖屏展示",
            "9:16",
            (936, 1664),
            "竖版构图，适合竖屏显示",
            "9:16竖屏比例",
            "春联采用传统竖向书写方式，从上往下排列。上联和下联纵向并列，横批在顶部。所有文字必须竖向排列（每个字独立一行，从上到下），上下呼应",
        ),
        layout(
            "square",
            "方形布局",
            "1:1方形布局，适合社交媒体头像和印刷",
            "1:1",
            (1024, 1024),
            "方形构图，均衡稳定",
            "1:1方形比例",
            "春联采用传统竖向书写方式，居中排列。右侧为上联，左侧为下联，顶部为横批。文字必须竖向排列（每个字独立一行，从上到下），左右对称平衡",
        ),
        layout(
            "golden-ratio",
            "黄金比例",
            "16:10黄金比例，视觉效果最佳的经典比例",
            "16:10",
            (1600, 1000),
            "黄金比例构图，视觉效果最佳",
            "16:10黄金比例",
            "春联采用传统竖向书写方式，按黄金分割点排列。右侧为上联，左侧为下联。文字必须竖向排列（每个字独立一行，从上到下），和谐美观",
        ),
        layout(
            "traditional-scroll",
            "传统卷轴",
            "3:4传统卷轴比例，符合中国传统绘画习惯",
            "3:4",
            (1200, 1600),
            "传统卷轴构图，符合中国文化习惯",
            "3:4传统比例",
            "春联采用传统竖向书写方式，仿古卷轴纵向布局。上联和下联纵向排列，横批在顶部。所有文字必须竖向排列（每个字独立一行，从上到下），仿古卷轴风格",
        ),
    ];
    OptionTable::with_default(Dimension::Layout, entries, DEFAULT_LAYOUT)
}

fn color_scheme(
    value: &str,
    label: &str,
    description: &str,
    colors: &str,
    palette: &str,
    mood: &str,
    harmony: &str,
) -> ConfigOption {
    ConfigOption::new(value, label, description)
        .with(keys::COLORS, colors)
        .with(keys::PALETTE, palette)
        .with(keys::MOOD, mood)
        .with(keys::HARMONY, harmony)
}

pub fn color_schemes() -> OptionTable {
    let entries = vec![
        color_scheme(
            "classic-red-gold",
            "经典红金",
            "传统春节红金配色，喜庆热烈，寓意吉祥",
            "#DC2626,#F59E0B,#FEF3C7",
            "经典红金配色，大红、金黄、深红的层次搭配",
            "喜庆热烈，传统吉祥",
            "红金色彩和谐统一，富贵大气",
        ),
        color_scheme(
            "warm-tone",
            "温暖色调",
            "温暖的橙红色系，营造温馨和谐的氛围",
            "#EA580C,#F97316,#FED7AA",
            "温暖色调，橙红、暖黄、桃红的渐变组合",
            "温馨和谐，亲切温暖",
            "暖色系和谐搭配，营造温馨氛围",
        ),
        color_scheme(
            "cool-tone",
            "冷色调",
            "清新的蓝绿色系，现代简约，宁静致远",
            "#0369A1,#0891B2,#A7F3D0",
            "冷色调，蓝绿、青色、紫色的清新组合",
            "清新宁静，现代简约",
            "冷色系清新搭配，宁静致远",
        ),
        color_scheme(
            "monochrome",
            "单色调",
            "经典黑白灰单色调，简约大气，永不过时",
            "#1F2937,#6B7280,#F3F4F6",
            "单色调，黑白灰的经典搭配",
            "简约大气，永恒经典",
            "黑白灰层次分明，简约而不简单",
        ),
        color_scheme(
            "vibrant",
            "鲜艳色彩",
            "高饱和度鲜艳色彩，活力四射，青春洋溢",
            "#DC2626,#7C3AED,#059669",
            "鲜艳色彩，高饱和度的多彩组合",
            "活力四射，青春洋溢",
            "鲜艳色彩对比强烈，充满活力",
        ),
        color_scheme(
            "elegant-dark",
            "优雅深色",
            "深色系优雅配色，神秘高贵，质感十足",
            "#1E1B4B,#312E81,#6366F1",
            "优雅深色，深蓝、深紫、墨绿的高贵组合",
            "神秘高贵，优雅深邃",
            "深色系优雅搭配，神秘而高贵",
        ),
        color_scheme(
            "fresh-light",
            "清新浅色",
            "清新淡雅的浅色系，温柔舒适，治愈系风格",
            "#FEF3C7,#FDE68A,#F59E0B",
            "清新浅色，淡粉、浅绿、米白的柔和组合",
            "清新淡雅，治愈温柔",
            "浅色系柔和搭配，清新脱俗",
        ),
        color_scheme(
            "gradient-sunset",
            "渐变夕阳",
            "夕阳渐变色彩，浪漫温馨，层次丰富",
            "#F97316,#EF4444,#EC4899",
            "渐变夕阳色，橙红到粉紫的浪漫渐变",
            "浪漫温馨，层次丰富",
            "渐变色彩层次丰富，浪漫而温馨",
        ),
    ];
    OptionTable::with_default(Dimension::ColorScheme, entries, DEFAULT_COLOR_SCHEME)
}

fn decoration(value: &str, label: &str, description: &str, elements: &str, prompt: &str) -> ConfigOption {
    ConfigOption::new(value, label, description)
        .with(keys::ELEMENTS, elements)
        .with(keys::PROMPT, prompt)
}

pub fn decorations() -> OptionTable {
    let entries = vec![
        decoration(
            "rich-ornate",
            "丰富华丽",
            "华丽繁复的装饰元素，富贵大气，层次丰富",
            "金色花纹,祥云,凤凰,牡丹,如意,宝鼎",
            "华丽繁复的装饰元素，金色花纹、祥云、凤凰、牡丹、如意、宝鼎等富贵装饰",
        ),
        decoration(
            "simple-elegant",
            "简约优雅",
            "简约而优雅的装饰，恰到好处，不喧宾夺主",
            "简约花纹,淡雅祥云,梅花,竹叶,水波纹",
            "简约优雅的装饰，淡雅祥云、梅花、竹叶、水波纹等恰到好处的点缀",
        ),
        decoration(
            "traditional-folk",
            "传统民俗",
            "传统民俗装饰元素，文化底蕴深厚，寓意吉祥",
            "红灯笼,中国结,窗花,年画,福字,鞭炮",
            "传统民俗装饰元素，红灯笼、中国结、窗花、年画、福字、鞭炮等喜庆装饰",
        ),
        decoration(
            "modern-geometric",
            "现代几何",
            "现代几何图案装饰，简洁时尚，富有设计感",
            "几何图形,线条装饰,抽象图案,渐变色块",
            "现代几何图案装饰，简洁线条、抽象图案、渐变色块等时尚元素",
        ),
        decoration(
            "nature-organic",
            "自然有机",
            "自然有机的装饰元素，生机盎然，和谐自然",
            "花草藤蔓,树枝,叶子,花朵,蝴蝶,鸟儿",
            "自然有机装饰元素，花草藤蔓、树枝、叶子、花朵、蝴蝶、鸟儿等生机装饰",
        ),
        decoration(
            "minimal-clean",
            "极简干净",
            "极简主义装饰，干净利落，突出主体内容",
            "简单线条,点缀元素,留白空间",
            "极简主义装饰，简单线条、点缀元素、留白空间，突出主体内容",
        ),
    ];
    OptionTable::with_default(Dimension::Decoration, entries, DEFAULT_DECORATION)
}

fn background(value: &str, label: &str, description: &str, prompt: &str) -> ConfigOption {
    ConfigOption::new(value, label, description).with(keys::PROMPT, prompt)
}

pub fn backgrounds() -> OptionTable {
    let entries = vec![
        background(
            "solid-color",
            "纯色背景",
            "简洁的纯色背景，突出春联内容",
            "纯色背景，简洁统一的色彩背景",
        ),
        background(
            "gradient",
            "渐变背景",
            "优美的渐变色背景，层次丰富",
            "渐变背景，优美的色彩渐变过渡",
        ),
        background(
            "texture-paper",
            "纸质纹理",
            "传统纸质纹理背景，古朴自然",
            "纸质纹理背景，传统宣纸或古籍纸张质感",
        ),
        background(
            "texture-silk",
            "丝绸纹理",
            "丝绸质感背景，华贵典雅",
            "丝绸纹理背景，华贵的丝绸质感和光泽",
        ),
        background(
            "pattern-clouds",
            "祥云图案",
            "传统祥云图案背景，吉祥如意",
            "祥云图案背景，传统祥云纹样装饰",
        ),
        background(
            "pattern-flowers",
            "花卉图案",
            "精美花卉图案背景，生机盎然",
            "花卉图案背景，精美的花卉纹样装饰",
        ),
        background(
            "scene-interior",
            "室内场景",
            "温馨的室内场景背景，生活气息浓厚",
            "室内场景背景，温馨的居家环境",
        ),
        background(
            "scene-landscape",
            "风景场景",
            "美丽的风景场景背景，意境深远",
            "风景场景背景，优美的自然风光",
        ),
    ];
    OptionTable::with_default(Dimension::Background, entries, DEFAULT_BACKGROUND)
}

fn prompt_entry(value: &str, label: &str, prompt: &str) -> ConfigOption {
    ConfigOption::new(value, label, prompt).with(keys::PROMPT, prompt)
}

pub fn zodiacs() -> OptionTable {
    let entries = vec![
        prompt_entry("🐀 鼠年", "鼠年", "可爱的老鼠剪纸装饰"),
        prompt_entry("🐂 牛年", "牛年", "憨厚的牛造型装饰"),
        prompt_entry("🐅 虎年", "虎年", "威武的老虎剪纸"),
        prompt_entry("🐇 兔年", "兔年", "灵动的兔子造型"),
        prompt_entry("🐉 龙年", "龙年", "金色的祥龙盘旋"),
        prompt_entry("🐍 蛇年", "蛇年", "灵巧的蛇形纹样"),
        prompt_entry("🐎 马年", "马年", "奔腾的骏马装饰"),
        prompt_entry("🐐 羊年", "羊年", "温顺的羊造型"),
        prompt_entry("🐒 猴年", "猴年", "活泼的猴子剪纸"),
        prompt_entry("🐓 鸡年", "鸡年", "报晓的公鸡造型"),
        prompt_entry("🐕 狗年", "狗年", "忠诚的狗装饰"),
        prompt_entry("🐖 猪年", "猪年", "福气的猪造型"),
    ];
    OptionTable::with_generic(
        Dimension::Zodiac,
        entries,
        prompt_entry("", "生肖", "生肖装饰"),
    )
}

fn legacy_style(value: &str, scene: &str, ornaments: &str, color: &str) -> ConfigOption {
    ConfigOption::new(value, value, scene)
        .with(keys::SCENE, scene)
        .with(keys::ORNAMENTS, ornaments)
        .with(keys::COLOR, color)
}

pub fn styles() -> OptionTable {
    let entries = vec![
        legacy_style(
            "传统典雅",
            "典雅庄重的古典厅堂，实木家具，青花瓷摆件，古色古香",
            "红色灯笼、梅花、祥云、金色花纹、中国结、回纹装饰",
            "以红色和金色为主，色彩鲜艳饱满，富贵大气",
        ),
        legacy_style(
            "现代简约",
            "现代简约的明亮客厅，简洁线条，时尚家居，清爽空间",
            "简约灯笼、抽象梅花、几何纹样、现代装饰画",
            "以红色和白色为主，色彩清新明快，简洁时尚",
        ),
        legacy_style(
            "幽默搞笑",
            "温馨活泼的居家场景，卡通元素，趣味摆设，轻松氛围",
            "可爱卡通灯笼、Q版福字、趣味装饰、俏皮元素",
            "色彩明亮活泼，充满童趣和欢乐感",
        ),
        legacy_style(
            "文艺清新",
            "文艺清新的雅致空间，植物装饰，书画作品，诗意环境",
            "水墨风格装饰、兰花、竹子、淡雅花纹、书法作品",
            "以淡雅色调为主，红色点缀，清新脱俗",
        ),
    ];
    OptionTable::with_default(Dimension::Style, entries, DEFAULT_STYLE)
}

pub fn themes() -> OptionTable {
    let entries = vec![
        prompt_entry("事业顺利", "事业顺利", "办公桌、书籍、笔墨、印章、梯子向上的寓意装饰"),
        prompt_entry("财源广进", "财源广进", "金元宝、铜钱、聚宝盆、财神装饰、金币纹样"),
        prompt_entry("健康长寿", "健康长寿", "仙鹤、松树、寿桃、长寿结、灵芝装饰"),
        prompt_entry("学业有成", "学业有成", "书籍、文房四宝、状元帽、竹简、智慧树装饰"),
        prompt_entry("爱情美满", "爱情美满", "鸳鸯、喜鹊、并蒂莲、同心结、玫瑰花"),
        prompt_entry("阖家幸福", "阖家幸福", "全家福照片、温馨家居、儿童玩具、家庭装饰"),
        prompt_entry("平安顺遂", "平安顺遂", "平安结、护身符、佛手、祥云、如意装饰"),
        prompt_entry("万事如意", "万事如意", "如意、福袋、吉祥结、喜庆装饰、综合吉祥物"),
    ];
    OptionTable::with_generic(
        Dimension::Theme,
        entries,
        prompt_entry("", "吉祥", "各种吉祥装饰"),
    )
}

pub fn tones() -> OptionTable {
    let entries = vec![
        prompt_entry("庄重", "庄重", "气氛肃穆庄严，光线稳重，构图端正对称，给人以隆重感"),
        prompt_entry("活泼", "活泼", "气氛欢快热闹，光线明亮温暖，色彩跳跃，充满生机活力"),
        prompt_entry("温馨", "温馨", "气氛温暖柔和，光线柔美，色调温暖，营造家的温馨感"),
        prompt_entry("霸气", "霸气", "气氛宏大震撼，光线强烈，色彩浓烈，气势磅礴"),
    ];
    OptionTable::with_default(Dimension::Tone, entries, DEFAULT_TONE)
}

#[allow(clippy::too_many_arguments)]
fn preset(
    id: &str,
    name: &str,
    description: &str,
    [art_style, layout, color_scheme, decoration, background]: [&str; 5],
    tags: &[&str],
    is_default: bool,
) -> ConfigPreset {
    ConfigPreset {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        config: PresetSelection {
            art_style: art_style.to_string(),
            layout: layout.to_string(),
            color_scheme: color_scheme.to_string(),
            decoration: decoration.to_string(),
            background: background.to_string(),
        },
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        is_default,
    }
}

pub fn presets() -> Vec<ConfigPreset> {
    vec![
        preset(
            "classic-traditional",
            "经典传统",
            "传统中国风格，红金配色，华丽装饰",
            ["traditional-gongbi", "traditional-scroll", "classic-red-gold", "rich-ornate", "texture-paper"],
            &["传统", "经典", "华丽", "正式"],
            true,
        ),
        preset(
            "modern-minimalist",
            "现代简约",
            "现代简约风格，清新配色，简洁装饰",
            ["minimalist", "horizontal", "fresh-light", "minimal-clean", "gradient"],
            &["现代", "简约", "清新", "时尚"],
            false,
        ),
        preset(
            "ink-painting",
            "水墨丹青",
            "传统水墨画风格，意境深远，文人雅致",
            ["traditional-ink", "vertical", "monochrome", "simple-elegant", "texture-paper"],
            &["水墨", "文艺", "意境", "雅致"],
            false,
        ),
        preset(
            "cartoon-fun",
            "卡通趣味",
            "可爱卡通风格，鲜艳色彩，适合年轻人",
            ["cartoon-style", "square", "vibrant", "traditional-folk", "pattern-flowers"],
            &["卡通", "可爱", "趣味", "年轻"],
            false,
        ),
        preset(
            "paper-cut-folk",
            "剪纸民俗",
            "传统剪纸艺术，民俗元素，喜庆热闹",
            ["paper-cut", "horizontal", "classic-red-gold", "traditional-folk", "solid-color"],
            &["剪纸", "民俗", "喜庆", "传统"],
            false,
        ),
        preset(
            "elegant-dark",
            "优雅深邃",
            "深色优雅风格，神秘高贵，现代感强",
            ["modern-illustration", "golden-ratio", "elegant-dark", "modern-geometric", "gradient"],
            &["优雅", "深色", "现代", "高贵"],
            false,
        ),
    ]
}
