//! Instructional text shown when the item list cannot be loaded.

pub const SETUP_HELP: &str = "\
Unable to access the \"ItemList.txt\" file.

Make sure the ItemList.txt file is placed in a subfolder
named EventRegistry in the Documents folder.

The format of the ItemList.txt file is:
  Name of the Event Registry
  List of items, one per line
  --Use a blank line to separate groups of items
  --Enter   NEW COLUMN   to start a new column";

pub const SAMPLE_ITEM_LIST: &str = "\
Sample ItemList.txt file
------------------------------
Dollar Shoppe Wedding Registry

8 Plates
8 Knives

1 Spatula
2 Serving Spoons
1 Potato Peeler

NEW COLUMN
1 Dish Soap
1 Box of Soap Bars
1 Shampoo

6 Light Bulbs
2 Wash Cloths";
